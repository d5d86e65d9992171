use serenity::all::ChannelId;

/// An admin-controlled feature flag paired with its target channel.
///
/// The flag and the channel are stored as a single `Option` so a feature can never be
/// enabled without a channel, or disabled with a stale one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureToggle {
    channel_id: Option<ChannelId>,
}

impl FeatureToggle {
    /// Creates a toggle that is on and targets `channel_id`.
    pub fn enabled_in(channel_id: ChannelId) -> Self {
        Self {
            channel_id: Some(channel_id),
        }
    }

    /// Creates a toggle that is off.
    pub fn disabled() -> Self {
        Self { channel_id: None }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.channel_id.is_some()
    }

    /// Target channel, present if and only if the toggle is on.
    pub fn channel_id(&self) -> Option<ChannelId> {
        self.channel_id
    }
}

/// The on/off argument accepted by every toggle command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    /// Parses `on`/`off`, ignoring case.
    ///
    /// # Returns
    /// - `Some(Toggle)` - Argument is `on` or `off` in any case
    /// - `None` - Anything else
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("on") {
            Some(Self::On)
        } else if value.eq_ignore_ascii_case("off") {
            Some(Self::Off)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a new toggle starts disabled without a channel.
    ///
    /// Expected: disabled, no channel
    #[test]
    fn default_toggle_is_disabled() {
        let toggle = FeatureToggle::default();
        assert!(!toggle.is_enabled());
        assert_eq!(toggle.channel_id(), None);
        assert_eq!(toggle, FeatureToggle::disabled());
    }

    /// Tests that enabling records the channel.
    ///
    /// Expected: enabled with the given channel
    #[test]
    fn enabled_toggle_carries_channel() {
        let toggle = FeatureToggle::enabled_in(ChannelId::new(42));
        assert!(toggle.is_enabled());
        assert_eq!(toggle.channel_id(), Some(ChannelId::new(42)));
    }

    /// Tests case-insensitive parsing of the on/off argument.
    ///
    /// Expected: On/Off for any casing, None for other words
    #[test]
    fn parses_on_off_ignoring_case() {
        assert_eq!(Toggle::parse("on"), Some(Toggle::On));
        assert_eq!(Toggle::parse("ON"), Some(Toggle::On));
        assert_eq!(Toggle::parse("Off"), Some(Toggle::Off));
        assert_eq!(Toggle::parse("bogus"), None);
        assert_eq!(Toggle::parse(""), None);
    }
}
