use chrono::{Datelike, NaiveDate};

/// `YYYY-MM` key of the month containing `date`.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the following month, `None` past the end of the calendar.
pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// First days of every month touched by `[start, end]`, in order.
pub fn get_months_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let last = first_day_of_month(end);
    let mut months = Vec::new();
    let mut current = first_day_of_month(start);
    while current <= last {
        months.push(current);
        match next_month(current) {
            Some(next) => current = next,
            None => break,
        }
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_key() {
        assert_eq!(month_key(date(2024, 3, 31)), "2024-03");
    }

    #[test]
    fn test_months_between_crosses_year() {
        let months = get_months_between(date(2023, 11, 15), date(2024, 2, 1));
        let keys: Vec<String> = months.into_iter().map(month_key).collect();
        assert_eq!(keys, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_months_between_same_month_and_reversed() {
        assert_eq!(get_months_between(date(2024, 5, 2), date(2024, 5, 30)).len(), 1);
        assert!(get_months_between(date(2024, 5, 2), date(2024, 4, 30)).is_empty());
    }
}
