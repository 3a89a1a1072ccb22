pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Time of day stored as seconds since midnight, always below 24 hours so
/// that `hour()` stays in 0..=23.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const fn from_seconds(secs: u32) -> Option<Self> {
        if secs < SECONDS_PER_DAY {
            Some(Self(secs))
        } else {
            None
        }
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub const fn hour(&self) -> u32 {
        self.0 / 3600
    }

    pub fn to_hms_string(&self) -> String {
        let h = self.0 / 3600;
        let m = (self.0 % 3600) / 60;
        let s = self.0 % 60;
        format!("{:02}:{:02}:{:02}", h, m, s)
    }

    pub fn from_hms(time: &str) -> Option<Self> {
        const HOUR_TO_SEC: u32 = 60 * 60;
        const MINUTE_TO_SEC: u32 = 60;
        let mut split = time.split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        let seconds: u32 = split.next()?.parse().ok()?;
        if split.next().is_some() || minutes >= 60 || seconds >= 60 {
            return None;
        }
        Self::from_seconds(hours * HOUR_TO_SEC + minutes * MINUTE_TO_SEC + seconds)
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00:00";
    let stime = TimeOfDay::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn parse_unparse_2() {
    let time = "06:30:00";
    let stime = TimeOfDay::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn parse_unparse_3() {
    let time = "23:59:59";
    let stime = TimeOfDay::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn unpadded_hours_parse() {
    let stime = TimeOfDay::from_hms("6:30:00").unwrap();
    assert_eq!("06:30:00", stime.to_hms_string())
}

#[test]
fn hour_component_1() {
    assert_eq!(TimeOfDay::from_hms("06:30:00").unwrap().hour(), 6);
}

#[test]
fn hour_component_2() {
    assert_eq!(TimeOfDay::from_hms("23:00:00").unwrap().hour(), 23);
}

#[test]
fn from_seconds_in_range() {
    assert_eq!(TimeOfDay::from_seconds(23400).unwrap().as_seconds(), 23400);
}

#[test]
fn from_seconds_rejects_full_day() {
    assert!(TimeOfDay::from_seconds(SECONDS_PER_DAY).is_none());
}

#[test]
fn invalid_time_missing_seconds() {
    assert!(TimeOfDay::from_hms("06:30").is_none());
}

#[test]
fn invalid_time_garbage_seconds() {
    assert!(TimeOfDay::from_hms("06:30:0a").is_none());
}

#[test]
fn invalid_time_minutes_out_of_range() {
    assert!(TimeOfDay::from_hms("06:99:00").is_none());
}

#[test]
fn invalid_time_past_midnight() {
    assert!(TimeOfDay::from_hms("24:00:00").is_none());
}
