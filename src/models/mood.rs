/// The fixed set of moods offered by the mood selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Calm,
    Sad,
    Anxious,
    Frustrated,
}

impl Mood {
    /// All moods in display order.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Sad,
        Mood::Anxious,
        Mood::Frustrated,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Frustrated => "Frustrated",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Calm => "😌",
            Mood::Sad => "😔",
            Mood::Anxious => "😰",
            Mood::Frustrated => "😤",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let labels: Vec<_> = Mood::ALL.iter().map(Mood::label).collect();
        assert_eq!(labels, ["Happy", "Calm", "Sad", "Anxious", "Frustrated"]);
    }
}
