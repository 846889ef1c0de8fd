//! Tabular export of reclassified series.

use mispricing_traits::Result;
use polars::prelude::*;

use crate::reclassify::ReclassifiedYear;

/// Build a DataFrame with one row per reclassified year.
///
/// Columns: `year`, `nopat`, `net_investment`, `free_cash_flow`, in the order
/// of `records` (most recent first for [`crate::reclassify()`] output).
///
/// # Errors
///
/// Returns an error if the DataFrame cannot be constructed.
pub fn reclassified_frame(records: &[ReclassifiedYear]) -> Result<DataFrame> {
    let years: Vec<i32> = records.iter().map(|r| r.year.value()).collect();
    let nopat: Vec<i64> = records.iter().map(|r| r.nopat).collect();
    let net_investment: Vec<i64> = records.iter().map(|r| r.net_investment).collect();
    let free_cash_flow: Vec<i64> = records.iter().map(|r| r.free_cash_flow).collect();

    let df = df! {
        "year" => years,
        "nopat" => nopat,
        "net_investment" => net_investment,
        "free_cash_flow" => free_cash_flow,
    }?;

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mispricing_traits::FiscalYear;

    #[test]
    fn test_frame_columns_and_order() {
        let records = vec![
            ReclassifiedYear {
                year: FiscalYear::new(2023),
                nopat: 720,
                net_investment: 80,
                free_cash_flow: 640,
            },
            ReclassifiedYear {
                year: FiscalYear::new(2022),
                nopat: 576,
                net_investment: 75,
                free_cash_flow: 501,
            },
        ];

        let df = reclassified_frame(&records).unwrap();
        assert_eq!(df.height(), 2);
        let names: Vec<_> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["year", "nopat", "net_investment", "free_cash_flow"]);

        let years = df.column("year").unwrap().as_materialized_series().i32().unwrap();
        assert_eq!(years.get(0), Some(2023));
        let fcf = df
            .column("free_cash_flow")
            .unwrap()
            .as_materialized_series()
            .i64()
            .unwrap();
        assert_eq!(fcf.get(1), Some(501));
    }

    #[test]
    fn test_empty_frame() {
        let df = reclassified_frame(&[]).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 4);
    }
}
