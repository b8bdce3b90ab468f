/// Quick actions offered on the toolkit screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickTool {
    BreathingExercise,
    SelfCompassion,
    ThoughtCheck,
    Grounding,
    PersonalizeDashboard,
}

impl QuickTool {
    pub const ALL: [QuickTool; 5] = [
        QuickTool::BreathingExercise,
        QuickTool::SelfCompassion,
        QuickTool::ThoughtCheck,
        QuickTool::Grounding,
        QuickTool::PersonalizeDashboard,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            QuickTool::BreathingExercise => "Breathing Exercise",
            QuickTool::SelfCompassion => "Self-Compassion",
            QuickTool::ThoughtCheck => "Thought Check",
            QuickTool::Grounding => "Grounding",
            QuickTool::PersonalizeDashboard => "Personalize Dashboard",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuickTool::BreathingExercise => "Take a moment to breathe",
            QuickTool::SelfCompassion => "Practice kind self-talk",
            QuickTool::ThoughtCheck => "Challenge negative thoughts",
            QuickTool::Grounding => "Connect with your senses",
            QuickTool::PersonalizeDashboard => "Customize your experience",
        }
    }

    /// Single-glyph icon for the tool card.
    pub fn icon(&self) -> &'static str {
        match self {
            QuickTool::BreathingExercise => "○",
            QuickTool::SelfCompassion => "♥",
            QuickTool::ThoughtCheck => "✦",
            QuickTool::Grounding => "◆",
            QuickTool::PersonalizeDashboard => "⚙",
        }
    }
}
