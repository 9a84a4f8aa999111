/// A window of time with an optional start and a mandatory end.
///
/// Both bounds are inclusive. An unset start leaves the window unbounded below.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Period<DateTime> {
    /// The first instant of the window, if bounded
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub start_date: Option<DateTime>,
    /// The last instant of the window
    pub end_date: DateTime,
}

impl<DateTime: Ord> Period<DateTime> {
    /// Whether `instant` falls inside the window.
    pub fn contains(&self, instant: &DateTime) -> bool {
        let started = self
            .start_date
            .as_ref()
            .is_none_or(|start| start <= instant);
        started && instant <= &self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(10), 20, 9, false)]
    #[case(Some(10), 20, 10, true)]
    #[case(Some(10), 20, 15, true)]
    #[case(Some(10), 20, 20, true)]
    #[case(Some(10), 20, 21, false)]
    #[case(None, 20, -1_000, true)]
    #[case(None, 20, 21, false)]
    fn window_bounds(
        #[case] start_date: Option<i64>,
        #[case] end_date: i64,
        #[case] now: i64,
        #[case] expected: bool,
    ) {
        let period = Period {
            start_date,
            end_date,
        };
        assert_eq!(period.contains(&now), expected);
    }
}
