//! Overview fixture: both tables for the comparison chart, serial-dated.

use lookback_core::{HistoricalPoint, IndicesPayload, RawDate, RawValue, SeriesEntry, TableKind};

/// January 1st of 2014 through 2024 as spreadsheet serial day counts.
pub const SERIAL_YEARS: [f64; 11] = [
    41_640.0, 42_005.0, 42_370.0, 42_736.0, 43_101.0, 43_466.0, 43_831.0, 44_197.0, 44_562.0,
    44_927.0, 45_292.0,
];

fn points(values: &[Option<f64>]) -> Vec<HistoricalPoint> {
    SERIAL_YEARS
        .iter()
        .zip(values)
        .map(|(&day, &value)| HistoricalPoint {
            date: RawDate::Serial(day),
            value: value.map(RawValue::Number),
        })
        .collect()
}

fn entry(table: TableKind, name: &str, values: &[Option<f64>]) -> SeriesEntry {
    SeriesEntry {
        table,
        index_name: name.to_string(),
        historical_data: points(values),
    }
}

fn v(values: [f64; 11]) -> Vec<Option<f64>> {
    values.into_iter().map(Some).collect()
}

/// The full overview payload: seven indices across both tables.
///
/// SENSEX carries one genuine gap so consumers exercise gap handling.
#[must_use]
pub fn overview() -> IndicesPayload {
    let base = TableKind::BaseAdjusted;
    let actual = TableKind::Actual;

    let mut sensex_base = v([
        100.0, 103.2, 98.5, 112.9, 126.1, 131.7, 135.4, 158.2, 171.0, 189.6, 214.3,
    ]);
    sensex_base[5] = None;
    let mut sensex_actual = v([
        21_170.0, 21_847.0, 20_852.0, 23_900.0, 26_695.0, 27_881.0, 28_664.0, 33_491.0, 36_199.0,
        40_138.0, 45_368.0,
    ]);
    sensex_actual[5] = None;

    IndicesPayload {
        data: vec![
            entry(
                base.clone(),
                "NASDAQ 100",
                &v([
                    100.0, 121.1, 142.6, 151.2, 199.5, 212.4, 291.0, 417.3, 484.0, 397.1, 523.8,
                ]),
            ),
            entry(
                base.clone(),
                "NIFTY IT",
                &v([
                    100.0, 117.6, 121.4, 118.2, 146.7, 169.3, 181.9, 278.0, 345.5, 301.2, 362.9,
                ]),
            ),
            entry(
                base.clone(),
                "BSE IT",
                &v([
                    100.0, 118.4, 123.0, 119.7, 149.2, 172.6, 184.5, 283.1, 351.8, 307.4, 371.2,
                ]),
            ),
            entry(
                base.clone(),
                "NIFTY",
                &v([
                    100.0, 131.4, 126.2, 132.9, 167.7, 173.1, 194.1, 223.3, 277.4, 289.5, 346.0,
                ]),
            ),
            entry(
                base.clone(),
                "DJIA",
                &v([
                    100.0, 107.5, 105.1, 119.2, 149.1, 140.7, 172.2, 184.6, 219.3, 200.1, 227.2,
                ]),
            ),
            entry(base.clone(), "SENSEX", &sensex_base),
            entry(
                base,
                "S&P 500",
                &v([
                    100.0, 111.4, 110.6, 121.1, 144.7, 135.6, 174.9, 203.0, 257.7, 207.9, 257.4,
                ]),
            ),
            entry(
                actual.clone(),
                "NASDAQ 100",
                &v([
                    3_592.0, 4_350.1, 5_122.2, 5_431.1, 7_166.0, 7_629.4, 10_452.8, 14_991.4,
                    17_386.4, 14_263.8, 18_814.9,
                ]),
            ),
            entry(
                actual.clone(),
                "NIFTY IT",
                &v([
                    9_418.0, 11_076.0, 11_434.1, 11_132.3, 13_816.3, 15_944.5, 17_131.1, 26_182.0,
                    32_539.2, 28_367.0, 34_178.2,
                ]),
            ),
            entry(
                actual.clone(),
                "BSE IT",
                &v([
                    9_066.0, 10_734.1, 11_151.2, 10_852.0, 13_527.5, 15_648.2, 16_727.0, 25_666.5,
                    31_895.1, 27_870.0, 33_655.2,
                ]),
            ),
            entry(
                actual.clone(),
                "NIFTY",
                &v([
                    6_301.7, 8_280.0, 7_951.4, 8_374.1, 10_566.8, 10_907.1, 12_230.5, 14_071.1,
                    17_479.2, 18_243.0, 21_803.1,
                ]),
            ),
            entry(
                actual.clone(),
                "DJIA",
                &v([
                    16_441.4, 17_674.2, 17_278.8, 19_599.3, 24_515.2, 23_135.4, 28_311.3,
                    30_349.8, 36_057.5, 32_903.1, 37_356.0,
                ]),
            ),
            entry(actual.clone(), "SENSEX", &sensex_actual),
            entry(
                actual,
                "S&P 500",
                &v([
                    1_845.9, 2_056.5, 2_041.5, 2_235.4, 2_670.7, 2_503.1, 3_228.8, 3_747.2,
                    4_757.0, 3_837.5, 4_751.1,
                ]),
            ),
        ],
        years: None,
        calculated_irr: None,
        value_of_investment: None,
        input: None,
    }
}
