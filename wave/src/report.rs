use std::{io, time::Duration};

use wavefft::{Complex64, Wave};

/// Significant digits printed per value.
const PRECISION: usize = 6;

/// Writes a `real`/`img`/`result` table with one row per sample, in index order.
///
/// Values are rounded to six significant digits so rounding noise such as
/// `-1.9999999999999998` prints as `-2` and stays inside its column.
pub(crate) fn write_results<W: io::Write>(out: &mut W, samples: &[Complex64]) -> io::Result<()> {
    writeln!(out, "{:>10}{:>15}{:>20}", "real", "img", "result")?;

    for sample in samples {
        let re = format_general(sample.re);
        let im = format_general(sample.im);
        writeln!(out, "{re:>10}{im:>15}{:>20}", format!("({re},{im})"))?;
    }

    Ok(())
}

/// Formats `value` with [`PRECISION`] significant digits in the shortest of fixed or
/// scientific notation, dropping trailing zeros (`printf`'s `%g`).
fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent after rounding, so 9.999995 counts as 10.
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Writes the duration of a transform in milliseconds.
pub(crate) fn write_timing<W: io::Write>(
    out: &mut W,
    wave: &Wave,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(
        out,
        "FFT of {} samples ({}, {}) took {:.3} ms",
        wave.len(),
        wave.strategy(),
        wave.kernel_name(),
        elapsed.as_secs_f64() * 1000.0
    )
}

#[cfg(test)]
mod tests {
    use wavefft::{Strategy, WaveConfig};

    use super::*;

    fn render(samples: &[Complex64]) -> String {
        let mut out = Vec::new();
        write_results(&mut out, samples).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_alignment() {
        let text = render(&[]);
        assert_eq!(text, "      real            img              result\n");
    }

    #[test]
    fn test_rows_in_index_order() {
        let samples = [Complex64::new(6.0, 0.0), Complex64::new(-2.0, 2.0)];
        let text = render(&samples);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "         6              0               (6,0)");
        assert_eq!(lines[2], "        -2              2              (-2,2)");
    }

    #[test]
    fn test_rounding_noise_stays_in_columns() {
        let samples = [
            Complex64::new(-1.9999999999999998, 2.0000000000000004),
            Complex64::new(0.1 + 0.2, 1.2246467991473532e-16),
        ];
        let text = render(&samples);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "        -2              2              (-2,2)");
        assert_eq!(lines[2], "       0.3    1.22465e-16   (0.3,1.22465e-16)");
        assert!(lines.iter().all(|line| line.len() == 45));
    }

    #[test]
    fn test_format_general() {
        assert_eq!(format_general(6.0), "6");
        assert_eq!(format_general(-0.0), "-0");
        assert_eq!(format_general(3.14159265), "3.14159");
        assert_eq!(format_general(9.9999996), "10");
        assert_eq!(format_general(100000.0), "100000");
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(0.0001234), "0.0001234");
        assert_eq!(format_general(1e-5), "1e-05");
        assert_eq!(format_general(-2.5e-300), "-2.5e-300");
        assert_eq!(format_general(f64::INFINITY), "inf");
        assert_eq!(format_general(f64::NAN), "nan");
    }

    #[test]
    fn test_timing_line() {
        let config = WaveConfig::new(2, Strategy::Recursive).unwrap();
        let wave = Wave::new(&config);
        let mut out = Vec::new();
        write_timing(&mut out, &wave, Duration::from_micros(1500)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "FFT of 4 samples (recursive, recursive) took 1.500 ms\n");
    }
}
