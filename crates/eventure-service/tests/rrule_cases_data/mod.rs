pub struct RuleCase {
    pub name: &'static str,
    pub dtstart: &'static str,
    pub rule: &'static str,
    /// Expected starts, anchor included. `None` compares against the reference engine only.
    pub expected: Option<&'static [&'static str]>,
}

pub fn rule_cases() -> Vec<RuleCase> {
    vec![
        RuleCase {
            name: "daily_basic",
            dtstart: "20120201T093000Z",
            rule: "FREQ=DAILY;COUNT=3",
            expected: Some(&[
                "2012-02-01T09:30:00+00:00",
                "2012-02-02T09:30:00+00:00",
                "2012-02-03T09:30:00+00:00",
            ]),
        },
        RuleCase {
            name: "daily_interval",
            dtstart: "20120201T093000Z",
            rule: "FREQ=DAILY;INTERVAL=10;COUNT=4",
            expected: Some(&[
                "2012-02-01T09:30:00+00:00",
                "2012-02-11T09:30:00+00:00",
                "2012-02-21T09:30:00+00:00",
                "2012-03-02T09:30:00+00:00",
            ]),
        },
        RuleCase {
            name: "weekly_basic",
            dtstart: "19970902T090000Z",
            rule: "FREQ=WEEKLY;COUNT=3",
            expected: Some(&[
                "1997-09-02T09:00:00+00:00",
                "1997-09-09T09:00:00+00:00",
                "1997-09-16T09:00:00+00:00",
            ]),
        },
        RuleCase {
            name: "weekly_biweekly",
            dtstart: "20231225T180000Z",
            rule: "FREQ=WEEKLY;INTERVAL=2;COUNT=10",
            expected: None,
        },
        RuleCase {
            name: "monthly_basic",
            dtstart: "20120115T090000Z",
            rule: "FREQ=MONTHLY;COUNT=3",
            expected: Some(&[
                "2012-01-15T09:00:00+00:00",
                "2012-02-15T09:00:00+00:00",
                "2012-03-15T09:00:00+00:00",
            ]),
        },
        RuleCase {
            name: "monthly_day_31_skips_short_months",
            dtstart: "20240131T080000Z",
            rule: "FREQ=MONTHLY;COUNT=6",
            expected: Some(&[
                "2024-01-31T08:00:00+00:00",
                "2024-03-31T08:00:00+00:00",
                "2024-05-31T08:00:00+00:00",
                "2024-07-31T08:00:00+00:00",
                "2024-08-31T08:00:00+00:00",
                "2024-10-31T08:00:00+00:00",
            ]),
        },
        RuleCase {
            name: "monthly_day_30_skips_february",
            dtstart: "20230130T120000Z",
            rule: "FREQ=MONTHLY;COUNT=14",
            expected: None,
        },
        RuleCase {
            name: "monthly_quarterly",
            dtstart: "20231130T070000Z",
            rule: "FREQ=MONTHLY;INTERVAL=3;COUNT=5",
            expected: None,
        },
        RuleCase {
            name: "yearly_basic",
            dtstart: "20120101T090000Z",
            rule: "FREQ=YEARLY;COUNT=3",
            expected: Some(&[
                "2012-01-01T09:00:00+00:00",
                "2013-01-01T09:00:00+00:00",
                "2014-01-01T09:00:00+00:00",
            ]),
        },
        RuleCase {
            name: "yearly_leap_day",
            dtstart: "20240229T070000Z",
            rule: "FREQ=YEARLY;COUNT=3",
            expected: Some(&[
                "2024-02-29T07:00:00+00:00",
                "2028-02-29T07:00:00+00:00",
                "2032-02-29T07:00:00+00:00",
            ]),
        },
        RuleCase {
            name: "yearly_interval",
            dtstart: "20200704T150000Z",
            rule: "FREQ=YEARLY;INTERVAL=4;COUNT=4",
            expected: None,
        },
        RuleCase {
            name: "monthly_until_from_day_31",
            dtstart: "20240131T080000Z",
            rule: "FREQ=MONTHLY;UNTIL=20240901T000000Z",
            expected: Some(&[
                "2024-01-31T08:00:00+00:00",
                "2024-03-31T08:00:00+00:00",
                "2024-05-31T08:00:00+00:00",
                "2024-07-31T08:00:00+00:00",
                "2024-08-31T08:00:00+00:00",
            ]),
        },
        RuleCase {
            name: "weekly_interval_until",
            dtstart: "20240101T090000Z",
            rule: "FREQ=WEEKLY;INTERVAL=3;UNTIL=20240305T000000Z",
            expected: Some(&[
                "2024-01-01T09:00:00+00:00",
                "2024-01-22T09:00:00+00:00",
                "2024-02-12T09:00:00+00:00",
                "2024-03-04T09:00:00+00:00",
            ]),
        },
        RuleCase {
            name: "yearly_interval_until_inclusive",
            dtstart: "20240301T090000Z",
            rule: "FREQ=YEARLY;INTERVAL=2;UNTIL=20300301T090000Z",
            expected: Some(&[
                "2024-03-01T09:00:00+00:00",
                "2026-03-01T09:00:00+00:00",
                "2028-03-01T09:00:00+00:00",
                "2030-03-01T09:00:00+00:00",
            ]),
        },
        RuleCase {
            name: "daily_interval_until",
            dtstart: "20240101T090000Z",
            rule: "FREQ=DAILY;INTERVAL=7;UNTIL=20240129T090000Z",
            expected: Some(&[
                "2024-01-01T09:00:00+00:00",
                "2024-01-08T09:00:00+00:00",
                "2024-01-15T09:00:00+00:00",
                "2024-01-22T09:00:00+00:00",
                "2024-01-29T09:00:00+00:00",
            ]),
        },
    ]
}
