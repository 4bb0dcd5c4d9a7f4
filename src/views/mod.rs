mod card;
mod content;
mod generate;
mod generations;
mod home;
mod login;
mod register;
mod settings;
mod setup;

pub use generate::Generate;
pub use generations::Generations;
pub use home::Home;
pub use login::Login;
pub use register::Register;
pub use settings::Settings;
pub use setup::Setup;
