//! Rental availability calendar.
//!
//! Deterministic: a day is open when the item can be rented at all and the
//! date is not one of the item's blackout dates.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::models::EquipmentItem;

/// Longest calendar window served in one request
pub const MAX_CALENDAR_DAYS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityCalendar {
    pub item_id: String,
    pub days: Vec<CalendarDay>,
    pub available_days: usize,
}

/// Whether `item` can be rented on `date`
pub fn is_available_on(item: &EquipmentItem, blackouts: &[NaiveDate], date: NaiveDate) -> bool {
    item.is_rentable && item.in_stock() && !blackouts.contains(&date)
}

/// Calendar of `days` consecutive days starting at `from`.
///
/// `days` is clamped to `1..=MAX_CALENDAR_DAYS`.
pub fn availability_calendar(
    item: &EquipmentItem,
    blackouts: &[NaiveDate],
    from: NaiveDate,
    days: u32,
) -> AvailabilityCalendar {
    let days: Vec<CalendarDay> = (0..days.clamp(1, MAX_CALENDAR_DAYS))
        .filter_map(|offset| from.checked_add_days(Days::new(u64::from(offset))))
        .map(|date| CalendarDay {
            date,
            available: is_available_on(item, blackouts, date),
        })
        .collect();

    AvailabilityCalendar {
        item_id: item.id.clone(),
        available_days: days.iter().filter(|d| d.available).count(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn regulator() -> EquipmentItem {
        EquipmentItem {
            id: "reg-001".to_string(),
            name: "MK25".to_string(),
            brand: "Scubapro".to_string(),
            category: Category::Regulators,
            rental_price: dec!(120),
            purchase_price: dec!(899),
            stock: 2,
            is_available: true,
            is_rentable: true,
            specifications: BTreeMap::new(),
            rating: 4.9,
            reviews: vec![],
            image_url: None,
        }
    }

    #[test]
    fn test_blackout_dates_closed() {
        let blackouts = [date(2024, 12, 24), date(2024, 12, 25)];
        let calendar = availability_calendar(&regulator(), &blackouts, date(2024, 12, 23), 4);

        let open: Vec<bool> = calendar.days.iter().map(|d| d.available).collect();
        assert_eq!(open, vec![true, false, false, true]);
        assert_eq!(calendar.available_days, 2);
        assert_eq!(calendar.days[3].date, date(2024, 12, 26));
    }

    #[test]
    fn test_out_of_stock_item_never_available() {
        let mut item = regulator();
        item.stock = 0;
        let calendar = availability_calendar(&item, &[], date(2024, 6, 1), 7);
        assert_eq!(calendar.available_days, 0);

        let mut item = regulator();
        item.is_rentable = false;
        assert!(!is_available_on(&item, &[], date(2024, 6, 1)));
    }

    #[test]
    fn test_calendar_is_deterministic() {
        let first = availability_calendar(&regulator(), &[], date(2024, 6, 1), 30);
        let second = availability_calendar(&regulator(), &[], date(2024, 6, 1), 30);
        assert_eq!(first.days, second.days);
        assert_eq!(first.available_days, 30);
    }

    #[test]
    fn test_days_clamped() {
        let item = regulator();
        assert_eq!(availability_calendar(&item, &[], date(2024, 1, 1), 0).days.len(), 1);
        assert_eq!(
            availability_calendar(&item, &[], date(2024, 1, 1), 1000).days.len(),
            MAX_CALENDAR_DAYS as usize
        );
    }
}
