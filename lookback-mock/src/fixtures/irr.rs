//! Calculation fixture: windowed tables plus the IRR summary, text-dated the
//! way the live calculation endpoint responds.

use lookback_core::{
    HistoricalPoint, IndicesPayload, RawDate, RawValue, RequestEcho, SeriesEntry, TableKind,
};
use lookback_types::CalculationRequest;

const YEARS: [&str; 9] = [
    "2016-01-01",
    "2017-01-01",
    "2018-01-01",
    "2019-01-01",
    "2020-01-01",
    "2021-01-01",
    "2022-01-01",
    "2023-01-01",
    "2024-01-01",
];

fn entry(table: TableKind, name: &str, values: [f64; 9]) -> SeriesEntry {
    SeriesEntry {
        table,
        index_name: name.to_string(),
        historical_data: YEARS
            .iter()
            .zip(values)
            .map(|(date, value)| HistoricalPoint {
                date: RawDate::Text((*date).to_string()),
                value: Some(RawValue::Number(value)),
            })
            .collect(),
    }
}

/// A deterministic calculation payload for the given request.
///
/// Tables span 2016 through 2024; the summary is fixed so orchestration
/// tests can assert exact display metrics.
#[must_use]
pub fn calculation(req: &CalculationRequest) -> IndicesPayload {
    let base = TableKind::BaseAdjusted;
    let actual = TableKind::Actual;

    IndicesPayload {
        data: vec![
            entry(
                base.clone(),
                "NASDAQ 100",
                [100.0, 106.0, 139.9, 148.9, 204.0, 292.7, 339.4, 278.5, 367.3],
            ),
            entry(
                base.clone(),
                "NIFTY IT",
                [100.0, 97.4, 120.8, 139.4, 149.8, 228.9, 284.6, 248.1, 298.9],
            ),
            entry(
                base.clone(),
                "BSE IT",
                [100.0, 97.3, 121.3, 140.3, 150.0, 230.2, 286.0, 249.9, 301.8],
            ),
            entry(
                base.clone(),
                "NIFTY",
                [100.0, 105.3, 132.9, 137.2, 153.8, 177.0, 219.8, 229.4, 274.2],
            ),
            entry(
                base,
                "SENSEX",
                [100.0, 114.6, 128.0, 133.7, 137.5, 160.6, 173.6, 192.5, 217.6],
            ),
            entry(
                actual.clone(),
                "NASDAQ 100",
                [
                    5_122.2, 5_431.1, 7_166.0, 7_629.4, 10_452.8, 14_991.4, 17_386.4, 14_263.8,
                    18_814.9,
                ],
            ),
            entry(
                actual.clone(),
                "NIFTY IT",
                [
                    11_434.1, 11_132.3, 13_816.3, 15_944.5, 17_131.1, 26_182.0, 32_539.2,
                    28_367.0, 34_178.2,
                ],
            ),
            entry(
                actual.clone(),
                "BSE IT",
                [
                    11_151.2, 10_852.0, 13_527.5, 15_648.2, 16_727.0, 25_666.5, 31_895.1,
                    27_870.0, 33_655.2,
                ],
            ),
            entry(
                actual.clone(),
                "NIFTY",
                [
                    7_951.4, 8_374.1, 10_566.8, 10_907.1, 12_230.5, 14_071.1, 17_479.2, 18_243.0,
                    21_803.1,
                ],
            ),
            entry(
                actual,
                "SENSEX",
                [
                    20_852.0, 23_900.0, 26_695.0, 27_881.0, 28_664.0, 33_491.0, 36_199.0,
                    40_138.0, 45_368.0,
                ],
            ),
        ],
        years: Some(RawValue::Number(9.0)),
        calculated_irr: Some(RawValue::Text("12.5".to_string())),
        value_of_investment: Some(RawValue::Text("291000".to_string())),
        input: Some(RequestEcho {
            start_date: Some(req.start_date.clone()),
            end_date: Some(req.end_date.clone()),
        }),
    }
}
