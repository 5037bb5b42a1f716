//! Sample data shown when the live spreadsheet is unavailable
//!
//! Values are fixed so repeated renders look the same. Cohort and
//! Monetization samples carry every column those views require.

use crate::domain::Table;

/// Sample table for `sheet_name`
pub fn sample_table(sheet_name: &str) -> Table {
    match sheet_name {
        "Cohort" => cohort_sample(),
        "Monetization" => monetization_sample(),
        _ => generic_sample(),
    }
}

fn cohort_sample() -> Table {
    const USERS: [u32; 6] = [1200, 1350, 980, 1510, 1275, 1420];
    const D1: [u32; 6] = [42, 45, 39, 47, 44, 46];
    const D7: [u32; 6] = [21, 23, 18, 25, 22, 24];
    const D30: [u32; 6] = [9, 11, 8, 12, 10, 11];

    let rows = (0..6)
        .map(|i| {
            vec![
                format!("2024-{:02}", i + 1),
                USERS[i].to_string(),
                format!("{}%", D1[i]),
                format!("{}%", D7[i]),
                format!("{}%", D30[i]),
            ]
        })
        .collect();

    build(
        &["COHORT", "USERS", "RETENTION_D1", "RETENTION_D7", "RETENTION_D30"],
        rows,
    )
}

fn monetization_sample() -> Table {
    const REVENUE: [f64; 7] = [1520.40, 1387.15, 1645.90, 1710.25, 1498.60, 1802.75, 1923.10];
    const DAU: [u32; 7] = [5400, 5120, 5630, 5810, 5290, 6020, 6240];
    const PAYERS: [u32; 7] = [162, 148, 175, 181, 157, 193, 206];

    let rows = (0..7)
        .map(|i| {
            let arpu = REVENUE[i] / f64::from(DAU[i]);
            let conversion = f64::from(PAYERS[i]) / f64::from(DAU[i]) * 100.0;
            vec![
                format!("2024-03-{:02}", i + 1),
                format!("{:.2}", REVENUE[i]),
                DAU[i].to_string(),
                format!("{arpu:.3}"),
                format!("{conversion:.1}%"),
            ]
        })
        .collect();

    build(&["INSTALL_DATE", "REVENUE", "DAU", "ARPU", "CONVERTION"], rows)
}

fn generic_sample() -> Table {
    let rows = [("Item A", "10"), ("Item B", "25"), ("Item C", "17")]
        .iter()
        .map(|(item, value)| vec![item.to_string(), value.to_string()])
        .collect();

    build(&["ITEM", "VALUE"], rows)
}

fn build(columns: &[&str], rows: Vec<Vec<String>>) -> Table {
    Table::from_parts(columns.iter().map(|c| c.to_string()).collect(), rows)
}
