/// Points awarded for a win
pub const WIN_POINTS: u32 = 2;

/// Points awarded to each side of a tied match
pub const TIE_POINTS: u32 = 1;

/// Points awarded to each side of an abandoned match (rain, bad light)
pub const NO_RESULT_POINTS: u32 = 1;

/// Outcome labels accepted by `Outcome::from_label`
pub const WIN_LABEL: &str = "win";
pub const TIE_LABEL: &str = "tie";
pub const NO_RESULT_LABEL: &str = "no_result";
