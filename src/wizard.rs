use crate::state::Setting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ContentType,
    TargetAudience,
    AdditionalContext,
    Done,
}

impl Step {
    pub fn next(self) -> Step {
        match self {
            Step::ContentType => Step::TargetAudience,
            Step::TargetAudience => Step::AdditionalContext,
            Step::AdditionalContext | Step::Done => Step::Done,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Step::ContentType => "ej. tutoriales de javascript en español",
            Step::TargetAudience => "ej. estudiantes de ingeniería",
            Step::AdditionalContext | Step::Done => {
                "ej. tengo un curso de python que quiero promocionar cuando sea apropiado"
            }
        }
    }
}

/// Onboarding form: one settings call per step, advancing only once the
/// backend accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    step: Step,
    pub content_type: String,
    pub target_audience: String,
    pub additional_context: String,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            step: Step::ContentType,
            content_type: String::new(),
            target_audience: String::new(),
            additional_context: String::new(),
        }
    }
}

impl Wizard {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &str {
        match self.step {
            Step::ContentType => &self.content_type,
            Step::TargetAudience => &self.target_audience,
            Step::AdditionalContext | Step::Done => &self.additional_context,
        }
    }

    pub fn set_draft(&mut self, value: String) {
        match self.step {
            Step::ContentType => self.content_type = value,
            Step::TargetAudience => self.target_audience = value,
            Step::AdditionalContext => self.additional_context = value,
            Step::Done => {}
        }
    }

    /// The settings update the current step submits.
    pub fn pending(&self) -> Option<Setting> {
        match self.step {
            Step::ContentType => Some(Setting::ContentType(self.content_type.clone())),
            Step::TargetAudience => Some(Setting::TargetAudience(self.target_audience.clone())),
            Step::AdditionalContext => {
                Some(Setting::AdditionalContext(self.additional_context.clone()))
            }
            Step::Done => None,
        }
    }

    pub fn complete<E>(&mut self, outcome: Result<(), E>) -> Result<Step, E> {
        outcome?;
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Only the optional last step can be skipped; nothing is submitted.
    pub fn skip(&mut self) -> bool {
        if self.step == Step::AdditionalContext {
            self.step = Step::Done;
            true
        } else {
            false
        }
    }
}
