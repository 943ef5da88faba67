//! Grid geometry and weapon table constants

/// Side length of one top-level map cell (meters)
pub const GRID_CELL_SIZE_M: f64 = 300.0;

/// Each subgrid digit selects one cell of a 3x3 partition
pub const SUBGRID_DIVISIONS: f64 = 3.0;

/// Number of lettered map columns (A-Z)
pub const MAX_GRID_COLUMNS: u8 = 26;

/// Default number of numbered map rows: every row two digits can name
pub const DEFAULT_GRID_ROWS: u8 = 99;

/// Mortar range table: (range in meters, elevation in mils), ascending by range
pub const MORTAR_RANGE_TABLE: [(f64, f64); 25] = [
    (50.0, 1579.0),
    (100.0, 1558.0),
    (150.0, 1538.0),
    (200.0, 1517.0),
    (250.0, 1496.0),
    (300.0, 1475.0),
    (350.0, 1453.0),
    (400.0, 1431.0),
    (450.0, 1409.0),
    (500.0, 1387.0),
    (550.0, 1364.0),
    (600.0, 1341.0),
    (650.0, 1317.0),
    (700.0, 1292.0),
    (750.0, 1267.0),
    (800.0, 1240.0),
    (850.0, 1212.0),
    (900.0, 1183.0),
    (950.0, 1152.0),
    (1000.0, 1118.0),
    (1050.0, 1081.0),
    (1100.0, 1039.0),
    (1150.0, 988.0),
    (1200.0, 918.0),
    (1250.0, 800.0),
];

/// Keypad layout of subgrid digits 1-9 as unit (dx, dy) steps, +y pointing up the keypad
pub const KEYPAD_OFFSETS: [(i8, i8); 9] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Map a column letter (either case) to its 1-based column index
pub fn column_index(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_lowercase() as u8 - b'a' + 1)
    } else {
        None
    }
}

/// Unit keypad direction for a subgrid digit; `None` for 0 and non-digits
pub fn keypad_offset(digit: char) -> Option<(i8, i8)> {
    match digit.to_digit(10) {
        Some(d @ 1..=9) => Some(KEYPAD_OFFSETS[(d - 1) as usize]),
        _ => None,
    }
}
