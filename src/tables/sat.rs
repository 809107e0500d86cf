//! SAT raw-to-scaled tables, percentile ranks and the ACT concordance.

use super::{ACT_FLOOR, DenseTable, PERCENTILE_FLOOR, SAT_SECTION_FLOOR, SparseTable};

pub const RW_MAX: u16 = 54;
pub const MATH_DIGITAL_MAX: u16 = 44;
pub const MATH_PAPER_MAX: u16 = 58;
pub const MATH_NO_CALC_MAX: u16 = 20;
pub const MATH_CALC_MAX: u16 = 38;

#[rustfmt::skip]
static PAPER_READING_WRITING: [u16; 55] = [
    200, 210, 220, 220, 230, 240, 250, 260, 270, 280,
    290, 300, 310, 320, 340, 350, 360, 370, 380, 400,
    410, 420, 430, 450, 460, 470, 490, 500, 510, 530,
    540, 550, 570, 580, 590, 600, 620, 630, 640, 650,
    660, 680, 690, 700, 710, 720, 730, 740, 750, 760,
    770, 780, 780, 790, 800,
];

#[rustfmt::skip]
static PAPER_MATH: [u16; 59] = [
    200, 210, 220, 220, 230, 240, 250, 260, 270, 270,
    280, 290, 300, 310, 320, 330, 350, 360, 370, 380,
    390, 400, 410, 430, 440, 450, 460, 480, 490, 500,
    510, 520, 540, 550, 560, 570, 590, 600, 610, 620,
    630, 640, 650, 670, 680, 690, 700, 710, 720, 730,
    730, 740, 750, 760, 770, 780, 780, 790, 800,
];

// Digital tables are selected by the second-module difficulty. The easy module
// caps the section below 800; the hard module lifts the floor.
#[rustfmt::skip]
static DIGITAL_READING_WRITING_EASY: [u16; 55] = [
    200, 210, 210, 220, 230, 230, 240, 250, 250, 260,
    270, 280, 280, 290, 300, 310, 320, 330, 340, 350,
    360, 370, 380, 390, 390, 400, 410, 420, 440, 450,
    460, 460, 470, 480, 490, 500, 510, 520, 530, 540,
    550, 560, 570, 570, 580, 590, 600, 600, 610, 620,
    620, 630, 640, 640, 650,
];

#[rustfmt::skip]
static DIGITAL_READING_WRITING_NORMAL: [u16; 55] = [
    200, 210, 220, 220, 230, 240, 250, 260, 270, 280,
    290, 300, 310, 320, 330, 340, 350, 360, 370, 380,
    390, 410, 420, 430, 440, 460, 470, 480, 490, 500,
    520, 530, 540, 550, 570, 580, 590, 600, 610, 620,
    630, 640, 650, 660, 670, 680, 690, 700, 710, 720,
    730, 740, 740, 750, 760,
];

#[rustfmt::skip]
static DIGITAL_READING_WRITING_HARD: [u16; 55] = [
    260, 270, 270, 280, 290, 300, 310, 320, 320, 330,
    340, 350, 360, 370, 380, 390, 400, 410, 420, 440,
    450, 460, 470, 480, 490, 510, 520, 530, 540, 550,
    570, 580, 590, 600, 610, 620, 640, 650, 660, 670,
    680, 690, 700, 710, 720, 730, 740, 740, 750, 760,
    770, 780, 790, 790, 800,
];

#[rustfmt::skip]
static DIGITAL_MATH_EASY: [u16; 45] = [
    200, 210, 210, 220, 230, 240, 250, 260, 270, 280,
    280, 290, 310, 320, 330, 340, 350, 360, 370, 380,
    400, 410, 420, 430, 440, 460, 470, 480, 490, 500,
    510, 520, 530, 550, 560, 560, 570, 580, 590, 600,
    610, 620, 630, 630, 640,
];

#[rustfmt::skip]
static DIGITAL_MATH_NORMAL: [u16; 45] = [
    200, 210, 220, 230, 240, 250, 260, 270, 280, 300,
    310, 320, 330, 350, 360, 380, 390, 400, 420, 430,
    450, 460, 480, 500, 510, 530, 540, 560, 570, 580,
    600, 610, 630, 640, 650, 660, 680, 690, 700, 710,
    720, 730, 740, 750, 760,
];

#[rustfmt::skip]
static DIGITAL_MATH_HARD: [u16; 45] = [
    260, 270, 280, 290, 300, 310, 320, 330, 340, 350,
    360, 380, 390, 400, 420, 430, 440, 460, 470, 490,
    500, 520, 530, 540, 560, 570, 590, 600, 620, 630,
    640, 660, 670, 680, 700, 710, 720, 730, 740, 750,
    760, 770, 780, 790, 800,
];

/// Total score breakpoints to national percentile rank.
static PERCENTILES: [(u16, u8); 25] = [
    (400, 1),
    (600, 1),
    (650, 2),
    (700, 3),
    (750, 6),
    (800, 10),
    (850, 16),
    (900, 23),
    (950, 31),
    (1000, 40),
    (1050, 49),
    (1100, 58),
    (1150, 66),
    (1200, 74),
    (1250, 81),
    (1300, 87),
    (1350, 91),
    (1400, 94),
    (1450, 96),
    (1500, 98),
    (1520, 98),
    (1550, 99),
    (1570, 99),
    (1590, 99),
    (1600, 99),
];

/// Total score breakpoints to ACT composite.
static ACT_CONCORDANCE: [(u16, u8); 28] = [
    (590, 9),
    (620, 10),
    (650, 11),
    (690, 12),
    (730, 13),
    (780, 14),
    (830, 15),
    (880, 16),
    (920, 17),
    (960, 18),
    (990, 19),
    (1030, 20),
    (1060, 21),
    (1100, 22),
    (1130, 23),
    (1160, 24),
    (1200, 25),
    (1230, 26),
    (1260, 27),
    (1300, 28),
    (1330, 29),
    (1360, 30),
    (1390, 31),
    (1420, 32),
    (1450, 33),
    (1490, 34),
    (1530, 35),
    (1570, 36),
];

pub static PAPER_RW_TABLE: DenseTable =
    DenseTable::new("sat.paper.reading_writing", &PAPER_READING_WRITING, SAT_SECTION_FLOOR);
pub static PAPER_MATH_TABLE: DenseTable =
    DenseTable::new("sat.paper.math", &PAPER_MATH, SAT_SECTION_FLOOR);

pub static DIGITAL_RW_EASY_TABLE: DenseTable = DenseTable::new(
    "sat.digital.reading_writing.easy",
    &DIGITAL_READING_WRITING_EASY,
    SAT_SECTION_FLOOR,
);
pub static DIGITAL_RW_NORMAL_TABLE: DenseTable = DenseTable::new(
    "sat.digital.reading_writing.normal",
    &DIGITAL_READING_WRITING_NORMAL,
    SAT_SECTION_FLOOR,
);
pub static DIGITAL_RW_HARD_TABLE: DenseTable = DenseTable::new(
    "sat.digital.reading_writing.hard",
    &DIGITAL_READING_WRITING_HARD,
    SAT_SECTION_FLOOR,
);
pub static DIGITAL_MATH_EASY_TABLE: DenseTable =
    DenseTable::new("sat.digital.math.easy", &DIGITAL_MATH_EASY, SAT_SECTION_FLOOR);
pub static DIGITAL_MATH_NORMAL_TABLE: DenseTable =
    DenseTable::new("sat.digital.math.normal", &DIGITAL_MATH_NORMAL, SAT_SECTION_FLOOR);
pub static DIGITAL_MATH_HARD_TABLE: DenseTable =
    DenseTable::new("sat.digital.math.hard", &DIGITAL_MATH_HARD, SAT_SECTION_FLOOR);

pub static PERCENTILE_TABLE: SparseTable =
    SparseTable::new("sat.percentile", &PERCENTILES, PERCENTILE_FLOOR);
pub static ACT_TABLE: SparseTable = SparseTable::new("sat.act", &ACT_CONCORDANCE, ACT_FLOOR);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::assert_non_decreasing;

    fn dense_tables() -> [&'static DenseTable; 8] {
        [
            &PAPER_RW_TABLE,
            &PAPER_MATH_TABLE,
            &DIGITAL_RW_EASY_TABLE,
            &DIGITAL_RW_NORMAL_TABLE,
            &DIGITAL_RW_HARD_TABLE,
            &DIGITAL_MATH_EASY_TABLE,
            &DIGITAL_MATH_NORMAL_TABLE,
            &DIGITAL_MATH_HARD_TABLE,
        ]
    }

    #[test]
    fn every_section_table_is_monotonic() {
        for table in dense_tables() {
            assert_non_decreasing(table.name, table.values());
        }
    }

    #[test]
    fn section_tables_stay_in_scaled_range() {
        for table in dense_tables() {
            for &value in table.values() {
                assert!(
                    (table.floor()..=800).contains(&value),
                    "{}: {value} out of range",
                    table.name
                );
            }
        }
    }

    #[test]
    fn table_sizes_match_section_maxima() {
        assert_eq!(PAPER_RW_TABLE.max_key(), Some(RW_MAX as usize));
        assert_eq!(PAPER_MATH_TABLE.max_key(), Some(MATH_PAPER_MAX as usize));
        assert_eq!(MATH_NO_CALC_MAX + MATH_CALC_MAX, MATH_PAPER_MAX);
        for table in [
            &DIGITAL_RW_EASY_TABLE,
            &DIGITAL_RW_NORMAL_TABLE,
            &DIGITAL_RW_HARD_TABLE,
        ] {
            assert_eq!(table.max_key(), Some(RW_MAX as usize), "{}", table.name);
        }
        for table in [
            &DIGITAL_MATH_EASY_TABLE,
            &DIGITAL_MATH_NORMAL_TABLE,
            &DIGITAL_MATH_HARD_TABLE,
        ] {
            assert_eq!(
                table.max_key(),
                Some(MATH_DIGITAL_MAX as usize),
                "{}",
                table.name
            );
        }
    }

    #[test]
    fn sparse_tables_are_sorted_and_monotonic() {
        for table in [&PERCENTILE_TABLE, &ACT_TABLE] {
            let keys: Vec<u16> = table.entries().iter().map(|(key, _)| *key).collect();
            let values: Vec<u8> = table.entries().iter().map(|(_, value)| *value).collect();
            assert!(keys.windows(2).all(|pair| pair[0] < pair[1]), "{}", table.name);
            assert_non_decreasing(table.name, &values);
        }
    }

    #[test]
    fn concordance_endpoints() {
        assert_eq!(ACT_TABLE.nearest(1600), 36);
        assert_eq!(ACT_TABLE.nearest(400), 9);
        assert_eq!(PERCENTILE_TABLE.nearest(1600), 99);
        assert_eq!(PERCENTILE_TABLE.nearest(400), 1);
    }
}
