//! CSV rendering of the sold-car report.

use serde::Serialize;

use super::reports_model::SoldCarsReport;
use crate::errors::{Error, Result};
use crate::profit_split::display_percentage;

#[derive(Serialize)]
struct SoldCarCsvRow<'a> {
    #[serde(rename = "Car")]
    car: &'a str,
    #[serde(rename = "VIN")]
    vin: &'a str,
    #[serde(rename = "Sold at")]
    sold_at: String,
    #[serde(rename = "Purchase price")]
    purchase_price: i64,
    #[serde(rename = "Price")]
    price: i64,
    #[serde(rename = "Shareholder")]
    shareholder: &'a str,
    #[serde(rename = "Shareholder %")]
    shareholder_percentage: String,
    #[serde(rename = "Shareholder profit")]
    shareholder_profit: i64,
    #[serde(rename = "Company profit")]
    company_profit: i64,
    #[serde(rename = "Seller")]
    seller: &'a str,
    #[serde(rename = "Commission")]
    commission: i64,
}

/// Renders the report rows as CSV with a header line.
pub fn sold_cars_to_csv(report: &SoldCarsReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if report.rows.is_empty() {
        // serialize() only emits the header alongside the first record
        writer.write_record([
            "Car",
            "VIN",
            "Sold at",
            "Purchase price",
            "Price",
            "Shareholder",
            "Shareholder %",
            "Shareholder profit",
            "Company profit",
            "Seller",
            "Commission",
        ])?;
    }

    for row in &report.rows {
        writer.serialize(SoldCarCsvRow {
            car: &row.car_name,
            vin: row.vin.as_deref().unwrap_or(""),
            sold_at: row.sold_at.format("%Y-%m-%d").to_string(),
            purchase_price: row.purchase_price,
            price: row.price,
            shareholder: row.shareholder_name.as_deref().unwrap_or(""),
            shareholder_percentage: row
                .shareholder_percentage
                .map(|p| display_percentage(p).to_string())
                .unwrap_or_default(),
            shareholder_profit: row.shareholder_profit,
            company_profit: row.company_profit,
            seller: row.seller_name.as_deref().unwrap_or(""),
            commission: row.commission,
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Report(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Report(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{SoldCarRow, SoldCarsTotals};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn report(rows: Vec<SoldCarRow>) -> SoldCarsReport {
        SoldCarsReport {
            from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            rows,
            totals: SoldCarsTotals::default(),
        }
    }

    #[test]
    fn test_empty_report_still_has_header() {
        let csv = sold_cars_to_csv(&report(Vec::new())).unwrap();
        assert_eq!(
            csv.trim_end(),
            "Car,VIN,Sold at,Purchase price,Price,Shareholder,Shareholder %,Shareholder profit,Company profit,Seller,Commission"
        );
    }

    #[test]
    fn test_row_formatting() {
        let csv = sold_cars_to_csv(&report(vec![SoldCarRow {
            car_id: "c1".to_string(),
            car_name: "2020 Toyota Camry".to_string(),
            vin: None,
            sold_at: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            purchase_price: 700,
            price: 1_000,
            shareholder_id: Some("s1".to_string()),
            shareholder_name: Some("Smith, John".to_string()),
            shareholder_percentage: Some(dec!(33.4)),
            shareholder_profit: 334,
            company_profit: 666,
            seller_id: None,
            seller_name: None,
            commission: 0,
        }]))
        .unwrap();

        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "2020 Toyota Camry,,2024-06-01,700,1000,\"Smith, John\",33,334,666,,0"
        );
    }
}
