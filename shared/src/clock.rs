use time::macros::format_description;
use time::OffsetDateTime;
use crate::error::{Error, ErrorCode, Result};

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// Clock line for the panel header, in Spanish long-date form with a
/// 12-hour time: `Fecha: 16 de octubre de 2026 | Hora: 01:05:09 p. m.`
pub fn format_clock(now: OffsetDateTime) -> Result<String> {
    let time = now
        .format(format_description!("[hour repr:12]:[minute]:[second]"))
        .map_err(|e| Error::with_details(ErrorCode::SystemError, "Failed to format time", e.to_string()))?;
    let period = if now.hour() < 12 { "a. m." } else { "p. m." };
    Ok(format!("Fecha: {} | Hora: {} {}", format_date(now), time, period))
}

pub fn format_date(now: OffsetDateTime) -> String {
    let month = MONTHS_ES[usize::from(u8::from(now.month())) - 1];
    format!("{} de {} de {}", now.day(), month, now.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_afternoon() {
        let now = datetime!(2026-10-16 13:05:09 UTC);
        assert_eq!(format_clock(now).unwrap(), "Fecha: 16 de octubre de 2026 | Hora: 01:05:09 p. m.");
    }

    #[test]
    fn formats_midnight_and_noon() {
        assert_eq!(
            format_clock(datetime!(2026-01-01 00:00:00 UTC)).unwrap(),
            "Fecha: 1 de enero de 2026 | Hora: 12:00:00 a. m."
        );
        assert_eq!(
            format_clock(datetime!(2026-12-31 12:30:00 UTC)).unwrap(),
            "Fecha: 31 de diciembre de 2026 | Hora: 12:30:00 p. m."
        );
    }
}
