use strum::{Display, EnumIter};

/// Fill color shared by both backends. Excel takes a packed RGB word,
/// Google Sheets takes 0..1 float channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn as_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub fn channels_f32(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

/// Allowed values of the "Application Status" column. The display string is
/// what goes in the dropdown and in the conditional-format formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Status {
    Applied,
    #[strum(serialize = "Interview Scheduled")]
    InterviewScheduled,
    Offer,
    Rejected,
    #[strum(serialize = "Followed Up")]
    FollowedUp,
    #[strum(serialize = "No Response")]
    NoResponse,
    #[strum(serialize = "On Hold")]
    OnHold,
}

impl Status {
    /// Row fill applied when the status column equals this value.
    pub fn fill(&self) -> Rgb {
        match self {
            Status::Applied => Rgb::new(0xAD, 0xD8, 0xE6), // Light Blue
            Status::InterviewScheduled => Rgb::new(0x90, 0xEE, 0x90), // Light Green
            Status::Offer => Rgb::new(0xFF, 0xFF, 0x00),   // Yellow
            Status::Rejected => Rgb::new(0xFF, 0x99, 0x99), // Light Red
            Status::FollowedUp => Rgb::new(0xFF, 0xA5, 0x00), // Orange
            Status::NoResponse => Rgb::new(0xD3, 0xD3, 0xD3), // Light Gray
            Status::OnHold => Rgb::new(0xE6, 0xE6, 0xFA),  // Lavender
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_display_strings() {
        assert_eq!(Status::Applied.to_string(), "Applied");
        assert_eq!(
            Status::InterviewScheduled.to_string(),
            "Interview Scheduled"
        );
        assert_eq!(Status::FollowedUp.to_string(), "Followed Up");
        assert_eq!(Status::NoResponse.to_string(), "No Response");
        assert_eq!(Status::OnHold.to_string(), "On Hold");
    }

    #[test]
    fn test_every_status_has_a_distinct_fill() {
        let fills: HashSet<u32> = Status::iter().map(|s| s.fill().as_u32()).collect();
        assert_eq!(fills.len(), Status::iter().count());
    }

    #[test]
    fn test_rgb_as_u32() {
        assert_eq!(Rgb::new(0xAD, 0xD8, 0xE6).as_u32(), 0x00AD_D8E6);
    }

    #[test]
    fn test_rgb_channels_f32() {
        let (r, g, b) = Rgb::new(0xFF, 0x00, 0x99).channels_f32();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.6).abs() < 0.01);
    }
}
