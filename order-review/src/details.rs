//! In-memory order options and the interaction rules that mutate them
//!
//! The persisted [`OrderOptions`] keeps `faster` and `time` as two loose
//! fields. Here timing is a single [`TimingChoice`], so "ASAP with a time"
//! cannot be represented, and dine-in / takeaway is one [`ServiceMode`].

use serde::{Deserialize, Serialize};
use shared::models::OrderOptions;

use crate::time::ClockTime;

/// When the order should be ready
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "time", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimingChoice {
    /// As soon as possible
    #[default]
    Asap,
    /// Not ASAP, but no time entered yet
    Unset,
    /// Explicit target time
    At(ClockTime),
}

impl TimingChoice {
    pub fn is_asap(&self) -> bool {
        matches!(self, Self::Asap)
    }

    pub fn time(&self) -> Option<ClockTime> {
        match self {
            Self::At(time) => Some(*time),
            _ => None,
        }
    }
}

/// Dine-in or takeaway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceMode {
    #[default]
    DineIn,
    /// Self service
    Takeaway,
}

impl ServiceMode {
    pub fn flipped(self) -> Self {
        match self {
            Self::DineIn => Self::Takeaway,
            Self::Takeaway => Self::DineIn,
        }
    }
}

/// Snapshot could not be turned into [`OrderDetails`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stored time: {0:?}")]
pub struct InvalidStoredTime(pub String);

/// Editable order options for the review screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderDetails {
    pub timing: TimingChoice,
    pub service: ServiceMode,
}

impl OrderDetails {
    // ========== Interactions ==========

    /// "As soon as possible" checkbox
    pub fn toggle_asap(&mut self) {
        self.timing = match self.timing {
            TimingChoice::Asap => TimingChoice::Unset,
            TimingChoice::Unset | TimingChoice::At(_) => TimingChoice::Asap,
        };
        tracing::debug!(timing = ?self.timing, "ASAP toggled");
    }

    /// Entering the time field always means "not ASAP"
    pub fn focus_time(&mut self) {
        if self.timing.is_asap() {
            self.timing = TimingChoice::Unset;
        }
    }

    /// One change of the time field's raw text
    pub fn edit_time(&mut self, raw: &str) {
        self.timing = TimingChoice::At(ClockTime::from_input(raw));
        tracing::debug!(raw = %raw, timing = ?self.timing, "Time edited");
    }

    /// Leaving the time field; a set time keeps ASAP off
    pub fn blur_time(&mut self) {
        // A set time is `At`, which already excludes ASAP
        tracing::trace!(timing = ?self.timing, "Time field blurred");
    }

    /// "Takeaway" checkbox
    pub fn toggle_takeaway(&mut self) {
        self.service = self.service.flipped();
        tracing::debug!(service = ?self.service, "Takeaway toggled");
    }

    /// "Dine-in" checkbox; the complementary view of the same value
    pub fn toggle_dine_in(&mut self) {
        self.service = self.service.flipped();
        tracing::debug!(service = ?self.service, "Dine-in toggled");
    }

    // ========== Checkbox views ==========

    pub fn asap_checked(&self) -> bool {
        self.timing.is_asap()
    }

    /// Text shown in the time field
    pub fn time_text(&self) -> String {
        self.timing.time().map(|t| t.to_string()).unwrap_or_default()
    }

    pub fn takeaway_checked(&self) -> bool {
        self.service == ServiceMode::Takeaway
    }

    pub fn dine_in_checked(&self) -> bool {
        !self.takeaway_checked()
    }

    // ========== Snapshot conversion ==========

    pub fn to_options(&self) -> OrderOptions {
        OrderOptions {
            faster: self.timing.is_asap(),
            time: self.time_text(),
            self_service: self.takeaway_checked(),
        }
    }

    /// Build from a stored snapshot. ASAP wins over a stored time; a
    /// non-empty time that is not strict `HH:MM` is rejected.
    pub fn from_options(options: &OrderOptions) -> Result<Self, InvalidStoredTime> {
        let stored_time = if options.time.is_empty() {
            None
        } else {
            Some(
                ClockTime::parse(&options.time)
                    .ok_or_else(|| InvalidStoredTime(options.time.clone()))?,
            )
        };

        let timing = match (options.faster, stored_time) {
            (true, _) => TimingChoice::Asap,
            (false, None) => TimingChoice::Unset,
            (false, Some(time)) => TimingChoice::At(time),
        };
        let service = if options.self_service {
            ServiceMode::Takeaway
        } else {
            ServiceMode::DineIn
        };

        Ok(Self { timing, service })
    }
}

impl TryFrom<&OrderOptions> for OrderDetails {
    type Error = InvalidStoredTime;

    fn try_from(options: &OrderOptions) -> Result<Self, Self::Error> {
        Self::from_options(options)
    }
}

impl From<&OrderDetails> for OrderOptions {
    fn from(details: &OrderDetails) -> Self {
        details.to_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DEFAULT_ORDER_DATA;

    fn at(hour: u8, minute: u8) -> TimingChoice {
        TimingChoice::At(ClockTime::new(hour, minute).unwrap())
    }

    #[test]
    fn test_default_is_asap_dine_in() {
        let details = OrderDetails::default();
        assert_eq!(details.to_options(), DEFAULT_ORDER_DATA);
    }

    #[test]
    fn test_toggle_asap_on_clears_time() {
        let mut details = OrderDetails {
            timing: at(14, 30),
            service: ServiceMode::DineIn,
        };
        details.toggle_asap();

        let options = details.to_options();
        assert!(options.faster);
        assert_eq!(options.time, "");
    }

    #[test]
    fn test_toggle_asap_on_from_unset() {
        let mut details = OrderDetails {
            timing: TimingChoice::Unset,
            ..Default::default()
        };
        details.toggle_asap();
        assert_eq!(details.timing, TimingChoice::Asap);
    }

    #[test]
    fn test_toggle_asap_off_leaves_time_empty() {
        let mut details = OrderDetails::default();
        details.toggle_asap();
        assert_eq!(details.timing, TimingChoice::Unset);
        assert_eq!(details.to_options().time, "");
        assert!(!details.to_options().faster);
    }

    #[test]
    fn test_focus_time_turns_asap_off() {
        let mut details = OrderDetails::default();
        details.focus_time();
        assert_eq!(details.timing, TimingChoice::Unset);

        let mut details = OrderDetails {
            timing: at(9, 0),
            ..Default::default()
        };
        details.focus_time();
        assert_eq!(details.timing, at(9, 0));
    }

    #[test]
    fn test_edit_time_normalizes_and_validates() {
        let mut details = OrderDetails::default();
        details.edit_time("930");
        assert_eq!(details.timing, at(9, 30));
        assert_eq!(details.time_text(), "09:30");

        details.edit_time("9999");
        assert_eq!(details.time_text(), "23:59");
        assert!(!details.asap_checked());
    }

    #[test]
    fn test_blur_keeps_time_and_asap_off() {
        let mut details = OrderDetails::default();
        details.focus_time();
        details.edit_time("1815");
        details.blur_time();
        assert_eq!(details.timing, at(18, 15));

        let mut untouched = OrderDetails::default();
        untouched.blur_time();
        assert_eq!(untouched.timing, TimingChoice::Asap);
    }

    #[test]
    fn test_service_views_are_complementary() {
        let mut details = OrderDetails::default();
        assert!(details.dine_in_checked());
        assert!(!details.takeaway_checked());

        details.toggle_takeaway();
        assert!(details.takeaway_checked());
        assert!(!details.dine_in_checked());

        details.toggle_dine_in();
        assert!(details.dine_in_checked());
        assert!(!details.takeaway_checked());

        details.toggle_dine_in();
        assert_eq!(details.service, ServiceMode::Takeaway);
    }

    #[test]
    fn test_service_toggle_does_not_touch_timing() {
        let mut details = OrderDetails {
            timing: at(12, 0),
            ..Default::default()
        };
        details.toggle_takeaway();
        assert_eq!(details.timing, at(12, 0));
    }

    #[test]
    fn test_service_mode_wire_names() {
        assert_eq!(serde_json::to_string(&ServiceMode::DineIn).unwrap(), r#""DINE_IN""#);
        assert_eq!(serde_json::to_string(&ServiceMode::Takeaway).unwrap(), r#""TAKEAWAY""#);
        assert_eq!(ServiceMode::default(), ServiceMode::DineIn);
    }

    #[test]
    fn test_from_options_round_trip() {
        let options = OrderOptions {
            faster: false,
            time: "07:45".into(),
            self_service: true,
        };
        let details = OrderDetails::from_options(&options).unwrap();
        assert_eq!(details.timing, at(7, 45));
        assert_eq!(details.service, ServiceMode::Takeaway);
        assert_eq!(details.to_options(), options);
    }

    #[test]
    fn test_from_options_asap_wins_over_time() {
        let options = OrderOptions {
            faster: true,
            time: "07:45".into(),
            self_service: false,
        };
        let details = OrderDetails::try_from(&options).unwrap();
        assert_eq!(details.timing, TimingChoice::Asap);
    }

    #[test]
    fn test_from_options_rejects_bad_time() {
        let options = OrderOptions {
            faster: false,
            time: "99:99".into(),
            self_service: false,
        };
        assert_eq!(
            OrderDetails::from_options(&options),
            Err(InvalidStoredTime("99:99".into()))
        );
    }
}
