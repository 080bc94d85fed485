//! Time-of-use tariff model and schedule checks

pub mod clock;
pub mod coverage;
pub mod lookup;
pub mod model;

pub use clock::{ClockTime, ClockTimeError, DayCode, MINUTES_PER_DAY};
pub use coverage::{validate_coverage, CoverageGap, CoverageOverlap, CoverageResult};
pub use lookup::{rates_at, rates_at_datetime, slot_entries};
pub use model::{TariffPeriod, TimeWindow};
