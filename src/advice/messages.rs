//! Advice message tables.
//!
//! `{summary}` is replaced with the day's workout summary.

use crate::athlete::UserRole;

/// Alternative phrasings of one piece of advice for each role.
pub struct MessageSet {
    athlete: &'static [&'static str],
    trainer: &'static [&'static str],
}

impl MessageSet {
    /// Pick a phrasing. The same `rotation` always yields the same message.
    ///
    /// An empty set yields an empty string.
    pub fn pick(&self, role: UserRole, rotation: usize) -> &'static str {
        let messages = match role {
            UserRole::Athlete => self.athlete,
            UserRole::Trainer => self.trainer,
        };
        rotation
            .checked_rem(messages.len())
            .and_then(|index| messages.get(index))
            .copied()
            .unwrap_or_default()
    }
}

// Good condition

pub const GOOD_PAST_UNUSED: MessageSet = MessageSet {
    athlete: &[
        "You were in good shape but nothing was logged. A missed opportunity.",
        "Conditions were favourable, but you took the day off.",
        "Good condition and no training recorded. A shame.",
        "You had room to train; maybe something else took priority.",
    ],
    trainer: &[
        "Your athlete was in a good spell but logged nothing. Push for more next time.",
        "A good window with no training. Review the plan together.",
        "The good spell went unused. Don't miss the next one.",
        "Condition was good but nothing was recorded. Consider adjusting the plan.",
    ],
};

pub const GOOD_PAST_TRAINED: MessageSet = MessageSet {
    athlete: &[
        "You were in form: {summary}.",
        "A good spell, well used with {summary}.",
        "Good condition and {summary}.",
        "{summary}. A strong day.",
    ],
    trainer: &[
        "Athlete in a good spell with {summary}. A productive session.",
        "Good condition put to use with {summary}.",
        "{summary}. You made the most of their form.",
        "{summary} during a good spell. Well coached.",
    ],
};

pub const GOOD_FUTURE: MessageSet = MessageSet {
    athlete: &[
        "A good day to train hard.",
        "You should be in good shape, so try raising the load.",
        "Looks like a good chance to try something new.",
        "A good day for a longer session.",
    ],
    trainer: &[
        "Athlete expected in form. Plan a demanding session.",
        "Good condition expected. Raise the load.",
        "A good time to introduce new skills or tactics.",
        "A good window for long or high-load work.",
    ],
};

pub const GOOD_TODAY_TRAINED: MessageSet = MessageSet {
    athlete: &["{summary}. Excellent work!"],
    trainer: &["{summary}. You're making the most of their form!"],
};

pub const GOOD_TODAY_OPEN: MessageSet = MessageSet {
    athlete: &[
        "Train with intent today.",
        "You're in good shape, so raise the load.",
        "Try a new kind of session today.",
        "A great day for a longer session.",
    ],
    trainer: &[
        "Athlete in form. Plan an ambitious session.",
        "Good condition. Coach a high-load session.",
        "A chance to work on new technique. Set a challenging menu.",
        "Ideal for a long training session.",
    ],
};

// Caution condition

pub const CAUTION_PAST_RESTED: MessageSet = MessageSet {
    athlete: &[
        "Recovery time, and you rested. Good call.",
        "You took it easy when you needed to. Perfect.",
        "Recovery phase with no training logged. Sensible.",
        "Rest came first. The right choice.",
    ],
    trainer: &[
        "Your athlete rested during recovery. Good judgement.",
        "Rest during the recovery phase. Well managed.",
        "Resting in the recovery phase was appropriate.",
        "You put rest first. The right call.",
    ],
};

pub const CAUTION_PAST_OVERWORKED: MessageSet = MessageSet {
    athlete: &[
        "It was time to recover but you did {summary}. Maybe too much.",
        "{summary} during recovery. Take care next time.",
        "{summary} was a heavy load for a recovery phase.",
        "{summary} while recovering. That looks too hard.",
    ],
    trainer: &[
        "It was time to recover, yet your athlete did {summary}. Possibly too much.",
        "{summary} during recovery. Review load management.",
        "{summary} in a recovery phase. Intensity should have been lower.",
        "{summary} while recovering. Watch your athlete's condition.",
    ],
};

pub const CAUTION_PAST_TRAINED: MessageSet = MessageSet {
    athlete: &[
        "Recovery time, and {summary} kept you moving gently.",
        "{summary} without overdoing it. Nice.",
        "Recovery first, with {summary}.",
        "{summary} while looking after your body.",
    ],
    trainer: &[
        "Recovery time, and {summary} was a sensible amount.",
        "{summary} without overload. Well coached.",
        "{summary} with recovery in mind. Good balance.",
        "{summary}, tailored to your athlete.",
    ],
};

pub const CAUTION_FUTURE: MessageSet = MessageSet {
    athlete: &[
        "Keep activity light.",
        "Put rest ahead of training.",
        "Focus on recovery.",
        "Stretching or yoga would help you loosen up.",
    ],
    trainer: &[
        "Plan a light session for your athlete.",
        "Don't push; put recovery first.",
        "Build the plan around active rest and stretching.",
        "Focus the session on recovering from fatigue.",
    ],
};

pub const CAUTION_TODAY_OVERWORKED: MessageSet = MessageSet {
    athlete: &["{summary}. You're recovering, so it may be better to ease off."],
    trainer: &["{summary}. It's a recovery phase, so your athlete's load should have been lower."],
};

pub const CAUTION_TODAY_TRAINED: MessageSet = MessageSet {
    athlete: &["{summary}. A sensible amount."],
    trainer: &["{summary}. A well-balanced amount of work."],
};

pub const CAUTION_TODAY_OPEN: MessageSet = MessageSet {
    athlete: &[
        "Keep it light today.",
        "Don't push; rest comes first.",
        "Focus on recovery today.",
        "Loosen up with stretching or yoga.",
    ],
    trainer: &[
        "Plan a light session for your athlete.",
        "Don't push; put rest first.",
        "Plan around your athlete's recovery.",
        "Schedule stretching or a recovery session.",
    ],
};

// Normal condition

pub const NORMAL_PAST_RESTED: MessageSet = MessageSet {
    athlete: &[
        "No training recorded.",
        "Looks like a rest day.",
        "No training.",
        "Nothing logged. Hopefully you recharged.",
    ],
    trainer: &[
        "No training recorded for your athlete.",
        "Looks like a rest day.",
        "No training. Was that the plan?",
        "Nothing logged. Have you checked in with your athlete?",
    ],
};

pub const NORMAL_PAST_TRAINED: MessageSet = MessageSet {
    athlete: &[
        "{summary}, as usual.",
        "{summary}, keeping an eye on your condition.",
        "{summary}. Nicely balanced.",
        "{summary}. On track.",
    ],
    trainer: &[
        "{summary}, as usual.",
        "{summary}, with your athlete's condition in mind.",
        "{summary}. A well-balanced session.",
        "{summary}. Steady progress.",
    ],
};

pub const NORMAL_FUTURE: MessageSet = MessageSet {
    athlete: &[
        "Train as usual.",
        "Keep going, and listen to your body.",
        "Aim for balanced training.",
        "Keep your usual pace.",
    ],
    trainer: &[
        "Plan the usual session for your athlete.",
        "Keep coaching while checking your athlete's condition.",
        "Put together a balanced session.",
        "Keep coaching at the usual pace.",
    ],
};

pub const NORMAL_TODAY_TRAINED: MessageSet = MessageSet {
    athlete: &["{summary}. Good pace!"],
    trainer: &["{summary}. Your coaching is keeping a good pace!"],
};

pub const NORMAL_TODAY_OPEN: MessageSet = MessageSet {
    athlete: &[
        "Train as usual today.",
        "Keep going, and listen to your body.",
        "Aim for balanced training.",
        "Make today count.",
    ],
    trainer: &[
        "Plan the usual session for your athlete.",
        "Coach while keeping an eye on your athlete's condition.",
        "Put together a balanced plan.",
        "Aim for good coaching today.",
    ],
};
