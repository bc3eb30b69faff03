//! Compiled-in correction tables.
//!
//! Echo sounder depths assume a nominal 1500 m/s sound speed. The
//! tables here map nominal depths to true depths per oceanic area:
//! each area carries breakpoints of (nominal, corrected) meters, both
//! columns strictly increasing, and the globe is partitioned into the
//! areas by one-degree latitude rows with per-row longitude
//! boundaries.

/// Shallowest correctable nominal depth, exclusive.
pub(crate) const MIN_DEPTH: f64 = 200.0;

/// Deepest correctable nominal depth, inclusive.
pub(crate) const MAX_DEPTH: f64 = 12_000.0;

/// Longitude boundaries for one latitude row. Each entry is the west
/// edge of an area; a longitude belongs to the last entry it is >= to.
/// Row 0 spans 89N..90N, row 179 spans 90S..89S.
pub(crate) fn boundaries(row: usize) -> &'static [(f64, u16)] {
    match row {
        // Arctic basin and marginal seas.
        0..=23 => &[(-180.0, 1), (-45.0, 2), (90.0, 3)],
        // Subarctic, 60N..66N.
        24..=29 => &[(-180.0, 46), (-130.0, 49), (-60.0, 40), (20.0, 44), (130.0, 46)],
        // North temperate, 45N..60N.
        30..=44 => &[
            (-180.0, 47),
            (-170.0, 48),
            (-130.0, 49),
            (-60.0, 40),
            (0.0, 41),
            (60.0, 44),
            (120.0, 47),
        ],
        // Subtropics, 25N..45N.
        45..=64 => &[(-180.0, 50), (-120.0, 51), (-30.0, 42), (40.0, 45), (100.0, 50)],
        // Tropics, 15S..25N.
        65..=104 => &[(-180.0, 52), (-80.0, 43), (20.0, 45), (80.0, 53), (150.0, 52)],
        // South temperate, 45S..15S.
        105..=134 => &[(-180.0, 54), (-70.0, 55), (20.0, 56), (120.0, 54)],
        // Southern Ocean, 65S..45S.
        135..=154 => &[(-180.0, 57), (-60.0, 58), (60.0, 59)],
        // Antarctic waters.
        _ => &[(-180.0, 60)],
    }
}

/// Breakpoint table for an area, or `None` for an unknown id.
pub(crate) fn breakpoints(area: u16) -> Option<&'static [(f64, f64)]> {
    let table: &'static [(f64, f64)] = match area {
        1 => AREA_01,
        2 => AREA_02,
        3 => AREA_03,
        40 => AREA_40,
        41 => AREA_41,
        42 => AREA_42,
        43 => AREA_43,
        44 => AREA_44,
        45 => AREA_45,
        46 => AREA_46,
        47 => AREA_47,
        48 => AREA_48,
        49 => AREA_49,
        50 => AREA_50,
        51 => AREA_51,
        52 => AREA_52,
        53 => AREA_53,
        54 => AREA_54,
        55 => AREA_55,
        56 => AREA_56,
        57 => AREA_57,
        58 => AREA_58,
        59 => AREA_59,
        60 => AREA_60,
        _ => return None,
    };
    Some(table)
}

/// Every area id with a table, for consistency checks.
#[cfg(test)]
pub(crate) const AREAS: &[u16] = &[1, 2, 3, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60];

const AREA_01: &[(f64, f64)] = &[
    (200.0, 192.5),
    (400.0, 385.1),
    (600.0, 577.8),
    (800.0, 770.7),
    (1000.0, 963.7),
    (1100.0, 1060.2),
    (1200.0, 1156.8),
    (1300.0, 1253.4),
    (1500.0, 1446.7),
    (1750.0, 1688.6),
    (2000.0, 1930.7),
    (2500.0, 2415.4),
    (3000.0, 2901.0),
    (3500.0, 3387.4),
    (4000.0, 3874.7),
    (4500.0, 4362.8),
    (5000.0, 4851.7),
    (6000.0, 5832.0),
    (7000.0, 6815.7),
    (8000.0, 7802.7),
    (9000.0, 8793.0),
    (10000.0, 9786.7),
    (11000.0, 10783.7),
    (12000.0, 11784.0),
];

const AREA_02: &[(f64, f64)] = &[
    (200.0, 193.1),
    (400.0, 386.3),
    (600.0, 579.7),
    (800.0, 773.2),
    (1000.0, 966.8),
    (1100.0, 1063.7),
    (1200.0, 1160.6),
    (1300.0, 1257.6),
    (1500.0, 1451.6),
    (1750.0, 1694.4),
    (2000.0, 1937.3),
    (2500.0, 2424.0),
    (3000.0, 2911.5),
    (3500.0, 3400.0),
    (4000.0, 3889.3),
    (4500.0, 4379.6),
    (5000.0, 4870.8),
    (6000.0, 5856.0),
    (7000.0, 6844.8),
    (8000.0, 7837.3),
    (9000.0, 8833.5),
    (10000.0, 9833.3),
    (11000.0, 10836.8),
    (12000.0, 11844.0),
];

const AREA_03: &[(f64, f64)] = &[
    (200.0, 193.7),
    (400.0, 387.4),
    (600.0, 581.3),
    (800.0, 775.4),
    (1000.0, 969.5),
    (1100.0, 1066.6),
    (1200.0, 1163.8),
    (1300.0, 1260.9),
    (1500.0, 1455.4),
    (1750.0, 1698.6),
    (2000.0, 1942.0),
    (2500.0, 2429.4),
    (3000.0, 2917.5),
    (3500.0, 3406.4),
    (4000.0, 3896.0),
    (4500.0, 4386.4),
    (5000.0, 4877.5),
    (6000.0, 5862.0),
    (7000.0, 6849.5),
    (8000.0, 7840.0),
    (9000.0, 8833.5),
    (10000.0, 9830.0),
    (11000.0, 10829.5),
    (12000.0, 11832.0),
];

const AREA_40: &[(f64, f64)] = &[
    (200.0, 195.7),
    (400.0, 391.5),
    (600.0, 587.6),
    (800.0, 783.8),
    (1000.0, 980.2),
    (1100.0, 1078.4),
    (1200.0, 1176.7),
    (1300.0, 1275.1),
    (1500.0, 1471.9),
    (1750.0, 1718.1),
    (2000.0, 1964.7),
    (2500.0, 2458.5),
    (3000.0, 2953.5),
    (3500.0, 3449.5),
    (4000.0, 3946.7),
    (4500.0, 4444.9),
    (5000.0, 4944.2),
    (6000.0, 5946.0),
    (7000.0, 6952.2),
    (8000.0, 7962.7),
    (9000.0, 8977.5),
    (10000.0, 9996.7),
    (11000.0, 11020.2),
    (12000.0, 12048.0),
];

const AREA_41: &[(f64, f64)] = &[
    (200.0, 196.1),
    (400.0, 392.3),
    (600.0, 588.7),
    (800.0, 785.3),
    (1000.0, 982.0),
    (1100.0, 1080.4),
    (1200.0, 1178.9),
    (1300.0, 1277.4),
    (1500.0, 1474.5),
    (1750.0, 1721.1),
    (2000.0, 1968.0),
    (2500.0, 2462.5),
    (3000.0, 2958.0),
    (3500.0, 3454.5),
    (4000.0, 3952.0),
    (4500.0, 4450.5),
    (5000.0, 4950.0),
    (6000.0, 5952.0),
    (7000.0, 6958.0),
    (8000.0, 7968.0),
    (9000.0, 8982.0),
    (10000.0, 10000.0),
    (11000.0, 11022.0),
    (12000.0, 12048.0),
];

const AREA_42: &[(f64, f64)] = &[
    (200.0, 196.7),
    (400.0, 393.6),
    (600.0, 590.6),
    (800.0, 787.9),
    (1000.0, 985.3),
    (1100.0, 1084.1),
    (1200.0, 1183.0),
    (1300.0, 1281.8),
    (1500.0, 1479.8),
    (1750.0, 1727.4),
    (2000.0, 1975.3),
    (2500.0, 2472.1),
    (3000.0, 2970.0),
    (3500.0, 3469.1),
    (4000.0, 3969.3),
    (4500.0, 4470.8),
    (5000.0, 4973.3),
    (6000.0, 5982.0),
    (7000.0, 6995.3),
    (8000.0, 8013.3),
    (9000.0, 9036.0),
    (10000.0, 10063.3),
    (11000.0, 11095.3),
    (12000.0, 12132.0),
];

const AREA_43: &[(f64, f64)] = &[
    (200.0, 198.1),
    (400.0, 396.4),
    (600.0, 594.9),
    (800.0, 793.6),
    (1000.0, 992.5),
    (1100.0, 1092.0),
    (1200.0, 1191.6),
    (1300.0, 1291.2),
    (1500.0, 1490.6),
    (1750.0, 1740.2),
    (2000.0, 1990.0),
    (2500.0, 2490.6),
    (3000.0, 2992.5),
    (3500.0, 3495.6),
    (4000.0, 4000.0),
    (4500.0, 4505.6),
    (5000.0, 5012.5),
    (6000.0, 6030.0),
    (7000.0, 7052.5),
    (8000.0, 8080.0),
    (9000.0, 9112.5),
    (10000.0, 10150.0),
    (11000.0, 11192.5),
    (12000.0, 12240.0),
];

const AREA_44: &[(f64, f64)] = &[
    (200.0, 195.3),
    (400.0, 390.8),
    (600.0, 586.4),
    (800.0, 782.2),
    (1000.0, 978.2),
    (1100.0, 1076.3),
    (1200.0, 1174.4),
    (1300.0, 1272.6),
    (1500.0, 1469.1),
    (1750.0, 1714.9),
    (2000.0, 1961.0),
    (2500.0, 2454.1),
    (3000.0, 2948.2),
    (3500.0, 3443.6),
    (4000.0, 3940.0),
    (4500.0, 4437.6),
    (5000.0, 4936.2),
    (6000.0, 5937.0),
    (7000.0, 6942.2),
    (8000.0, 7952.0),
    (9000.0, 8966.2),
    (10000.0, 9985.0),
    (11000.0, 11008.2),
    (12000.0, 12036.0),
];

const AREA_45: &[(f64, f64)] = &[
    (200.0, 197.5),
    (400.0, 395.2),
    (600.0, 593.2),
    (800.0, 791.3),
    (1000.0, 989.7),
    (1100.0, 1088.9),
    (1200.0, 1188.2),
    (1300.0, 1287.6),
    (1500.0, 1486.5),
    (1750.0, 1735.4),
    (2000.0, 1984.7),
    (2500.0, 2484.2),
    (3000.0, 2985.0),
    (3500.0, 3487.2),
    (4000.0, 3990.7),
    (4500.0, 4495.5),
    (5000.0, 5001.7),
    (6000.0, 6018.0),
    (7000.0, 7039.7),
    (8000.0, 8066.7),
    (9000.0, 9099.0),
    (10000.0, 10136.7),
    (11000.0, 11179.7),
    (12000.0, 12228.0),
];

const AREA_46: &[(f64, f64)] = &[
    (200.0, 194.1),
    (400.0, 388.3),
    (600.0, 582.7),
    (800.0, 777.2),
    (1000.0, 971.8),
    (1100.0, 1069.2),
    (1200.0, 1166.6),
    (1300.0, 1264.1),
    (1500.0, 1459.1),
    (1750.0, 1703.1),
    (2000.0, 1947.3),
    (2500.0, 2436.5),
    (3000.0, 2926.5),
    (3500.0, 3417.5),
    (4000.0, 3909.3),
    (4500.0, 4402.1),
    (5000.0, 4895.8),
    (6000.0, 5886.0),
    (7000.0, 6879.8),
    (8000.0, 7877.3),
    (9000.0, 8878.5),
    (10000.0, 9883.3),
    (11000.0, 10891.8),
    (12000.0, 11904.0),
];

const AREA_47: &[(f64, f64)] = &[
    (200.0, 194.5),
    (400.0, 389.1),
    (600.0, 583.9),
    (800.0, 778.9),
    (1000.0, 974.1),
    (1100.0, 1071.7),
    (1200.0, 1169.4),
    (1300.0, 1267.1),
    (1500.0, 1462.7),
    (1750.0, 1707.4),
    (2000.0, 1952.3),
    (2500.0, 2443.0),
    (3000.0, 2934.8),
    (3500.0, 3427.5),
    (4000.0, 3921.3),
    (4500.0, 4416.2),
    (5000.0, 4912.1),
    (6000.0, 5907.0),
    (7000.0, 6906.1),
    (8000.0, 7909.3),
    (9000.0, 8916.8),
    (10000.0, 9928.3),
    (11000.0, 10944.1),
    (12000.0, 11964.0),
];

const AREA_48: &[(f64, f64)] = &[
    (200.0, 195.1),
    (400.0, 390.4),
    (600.0, 585.9),
    (800.0, 781.6),
    (1000.0, 977.5),
    (1100.0, 1079.0),
    (1200.0, 1178.0),
    (1300.0, 1271.7),
    (1500.0, 1468.1),
    (1750.0, 1713.9),
    (2000.0, 1960.0),
    (2500.0, 2453.1),
    (3000.0, 2947.5),
    (3500.0, 3443.1),
    (4000.0, 3940.0),
    (4500.0, 4438.1),
    (5000.0, 4937.5),
    (6000.0, 5940.0),
    (7000.0, 6947.5),
    (8000.0, 7960.0),
    (9000.0, 8977.5),
    (10000.0, 10000.0),
    (11000.0, 11027.5),
    (12000.0, 12060.0),
];

const AREA_49: &[(f64, f64)] = &[
    (200.0, 194.7),
    (400.0, 389.6),
    (600.0, 584.6),
    (800.0, 779.9),
    (1000.0, 975.3),
    (1100.0, 1073.1),
    (1200.0, 1171.0),
    (1300.0, 1268.8),
    (1500.0, 1464.7),
    (1750.0, 1709.9),
    (2000.0, 1955.3),
    (2500.0, 2447.1),
    (3000.0, 2940.0),
    (3500.0, 3434.1),
    (4000.0, 3929.3),
    (4500.0, 4425.8),
    (5000.0, 4923.3),
    (6000.0, 5922.0),
    (7000.0, 6925.3),
    (8000.0, 7933.3),
    (9000.0, 8946.0),
    (10000.0, 9963.3),
    (11000.0, 10985.3),
    (12000.0, 12012.0),
];

const AREA_50: &[(f64, f64)] = &[
    (200.0, 196.3),
    (400.0, 392.8),
    (600.0, 589.5),
    (800.0, 786.3),
    (1000.0, 983.4),
    (1100.0, 1082.0),
    (1200.0, 1180.7),
    (1300.0, 1279.4),
    (1500.0, 1476.9),
    (1750.0, 1724.2),
    (2000.0, 1971.7),
    (2500.0, 2467.6),
    (3000.0, 2964.8),
    (3500.0, 3463.1),
    (4000.0, 3962.7),
    (4500.0, 4463.4),
    (5000.0, 4965.4),
    (6000.0, 5973.0),
    (7000.0, 6985.4),
    (8000.0, 8002.7),
    (9000.0, 9024.8),
    (10000.0, 10051.7),
    (11000.0, 11083.4),
    (12000.0, 12120.0),
];

const AREA_51: &[(f64, f64)] = &[
    (200.0, 196.9),
    (400.0, 394.0),
    (600.0, 591.3),
    (800.0, 788.9),
    (1000.0, 986.6),
    (1100.0, 1085.5),
    (1200.0, 1184.5),
    (1300.0, 1283.6),
    (1500.0, 1481.8),
    (1750.0, 1729.9),
    (2000.0, 1978.3),
    (2500.0, 2476.1),
    (3000.0, 2975.2),
    (3500.0, 3475.6),
    (4000.0, 3977.3),
    (4500.0, 4480.3),
    (5000.0, 4984.6),
    (6000.0, 5997.0),
    (7000.0, 7014.6),
    (8000.0, 8037.3),
    (9000.0, 9065.2),
    (10000.0, 10098.3),
    (11000.0, 11136.6),
    (12000.0, 12180.0),
];

const AREA_52: &[(f64, f64)] = &[
    (200.0, 198.5),
    (400.0, 397.3),
    (600.0, 596.2),
    (800.0, 795.4),
    (1000.0, 994.8),
    (1100.0, 1094.6),
    (1200.0, 1194.5),
    (1300.0, 1294.4),
    (1500.0, 1494.4),
    (1750.0, 1744.7),
    (2000.0, 1995.3),
    (2500.0, 2497.7),
    (3000.0, 3001.5),
    (3500.0, 3506.7),
    (4000.0, 4013.3),
    (4500.0, 4521.4),
    (5000.0, 5030.8),
    (6000.0, 6054.0),
    (7000.0, 7082.8),
    (8000.0, 8117.3),
    (9000.0, 9157.5),
    (10000.0, 10203.3),
    (11000.0, 11254.8),
    (12000.0, 12312.0),
];

const AREA_53: &[(f64, f64)] = &[
    (200.0, 198.9),
    (400.0, 398.0),
    (600.0, 597.4),
    (800.0, 797.0),
    (1000.0, 996.8),
    (1100.0, 1096.7),
    (1200.0, 1196.8),
    (1300.0, 1296.8),
    (1500.0, 1497.2),
    (1750.0, 1747.9),
    (2000.0, 1999.0),
    (2500.0, 2502.2),
    (3000.0, 3006.8),
    (3500.0, 3512.7),
    (4000.0, 4020.0),
    (4500.0, 4528.7),
    (5000.0, 5038.8),
    (6000.0, 6063.0),
    (7000.0, 7092.8),
    (8000.0, 8128.0),
    (9000.0, 9168.8),
    (10000.0, 10215.0),
    (11000.0, 11266.7),
    (12000.0, 12324.0),
];

const AREA_54: &[(f64, f64)] = &[
    (200.0, 197.3),
    (400.0, 394.8),
    (600.0, 592.5),
    (800.0, 790.4),
    (1000.0, 988.5),
    (1100.0, 1087.6),
    (1200.0, 1186.8),
    (1300.0, 1286.0),
    (1500.0, 1484.6),
    (1750.0, 1733.2),
    (2000.0, 1982.0),
    (2500.0, 2480.6),
    (3000.0, 2980.5),
    (3500.0, 3481.6),
    (4000.0, 3984.0),
    (4500.0, 4487.6),
    (5000.0, 4992.5),
    (6000.0, 6006.0),
    (7000.0, 7024.5),
    (8000.0, 8048.0),
    (9000.0, 9076.5),
    (10000.0, 10110.0),
    (11000.0, 11148.5),
    (12000.0, 12192.0),
];

const AREA_55: &[(f64, f64)] = &[
    (200.0, 197.1),
    (400.0, 394.4),
    (600.0, 591.9),
    (800.0, 789.5),
    (1000.0, 987.4),
    (1100.0, 1086.4),
    (1200.0, 1185.5),
    (1300.0, 1284.6),
    (1500.0, 1482.9),
    (1750.0, 1731.2),
    (2000.0, 1979.7),
    (2500.0, 2477.6),
    (3000.0, 2976.8),
    (3500.0, 3477.1),
    (4000.0, 3978.7),
    (4500.0, 4481.4),
    (5000.0, 4985.4),
    (6000.0, 5997.0),
    (7000.0, 7013.4),
    (8000.0, 8034.7),
    (9000.0, 9060.8),
    (10000.0, 10091.7),
    (11000.0, 11127.4),
    (12000.0, 12168.0),
];

const AREA_56: &[(f64, f64)] = &[
    (200.0, 197.7),
    (400.0, 395.6),
    (600.0, 593.7),
    (800.0, 792.1),
    (1000.0, 990.6),
    (1100.0, 1089.9),
    (1200.0, 1189.3),
    (1300.0, 1288.8),
    (1500.0, 1487.8),
    (1750.0, 1736.9),
    (2000.0, 1986.3),
    (2500.0, 2486.1),
    (3000.0, 2987.2),
    (3500.0, 3489.6),
    (4000.0, 3993.3),
    (4500.0, 4498.3),
    (5000.0, 5004.6),
    (6000.0, 6021.0),
    (7000.0, 7042.6),
    (8000.0, 8069.3),
    (9000.0, 9101.2),
    (10000.0, 10138.3),
    (11000.0, 11180.6),
    (12000.0, 12228.0),
];

const AREA_57: &[(f64, f64)] = &[
    (200.0, 194.9),
    (400.0, 389.9),
    (600.0, 585.1),
    (800.0, 780.5),
    (1000.0, 976.0),
    (1100.0, 1073.8),
    (1200.0, 1171.7),
    (1300.0, 1269.6),
    (1500.0, 1465.5),
    (1750.0, 1710.6),
    (2000.0, 1956.0),
    (2500.0, 2447.5),
    (3000.0, 2940.0),
    (3500.0, 3433.5),
    (4000.0, 3928.0),
    (4500.0, 4423.5),
    (5000.0, 4920.0),
    (6000.0, 5916.0),
    (7000.0, 6916.0),
    (8000.0, 7920.0),
    (9000.0, 8928.0),
    (10000.0, 9940.0),
    (11000.0, 10956.0),
    (12000.0, 11976.0),
];

const AREA_58: &[(f64, f64)] = &[
    (200.0, 194.3),
    (400.0, 388.7),
    (600.0, 583.3),
    (800.0, 778.0),
    (1000.0, 972.9),
    (1100.0, 1070.4),
    (1200.0, 1168.0),
    (1300.0, 1265.5),
    (1500.0, 1460.8),
    (1750.0, 1705.1),
    (2000.0, 1949.7),
    (2500.0, 2439.5),
    (3000.0, 2930.2),
    (3500.0, 3422.0),
    (4000.0, 3914.7),
    (4500.0, 4408.3),
    (5000.0, 4902.9),
    (6000.0, 5895.0),
    (7000.0, 6890.9),
    (8000.0, 7890.7),
    (9000.0, 8894.2),
    (10000.0, 9901.7),
    (11000.0, 10912.9),
    (12000.0, 11928.0),
];

const AREA_59: &[(f64, f64)] = &[
    (200.0, 193.9),
    (400.0, 387.9),
    (600.0, 582.0),
    (800.0, 776.3),
    (1000.0, 970.8),
    (1100.0, 1068.0),
    (1200.0, 1165.3),
    (1300.0, 1262.7),
    (1500.0, 1457.4),
    (1750.0, 1701.1),
    (2000.0, 1945.0),
    (2500.0, 2433.4),
    (3000.0, 2922.8),
    (3500.0, 3412.9),
    (4000.0, 3904.0),
    (4500.0, 4395.9),
    (5000.0, 4888.8),
    (6000.0, 5877.0),
    (7000.0, 6868.8),
    (8000.0, 7864.0),
    (9000.0, 8862.8),
    (10000.0, 9865.0),
    (11000.0, 10870.8),
    (12000.0, 11880.0),
];

const AREA_60: &[(f64, f64)] = &[
    (200.0, 193.3),
    (400.0, 386.7),
    (600.0, 580.2),
    (800.0, 773.8),
    (1000.0, 967.6),
    (1100.0, 1064.5),
    (1200.0, 1161.5),
    (1300.0, 1258.5),
    (1500.0, 1452.6),
    (1750.0, 1695.3),
    (2000.0, 1938.3),
    (2500.0, 2424.9),
    (3000.0, 2912.2),
    (3500.0, 3400.4),
    (4000.0, 3889.3),
    (4500.0, 4379.1),
    (5000.0, 4869.6),
    (6000.0, 5853.0),
    (7000.0, 6839.6),
    (8000.0, 7829.3),
    (9000.0, 8822.2),
    (10000.0, 9818.3),
    (11000.0, 10817.6),
    (12000.0, 11820.0),
];
