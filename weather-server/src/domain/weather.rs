//! Forecast payload models and report shaping.
//!
//! The inbound structs declare only the weatherapi.com fields the reports
//! consume; everything else in the payload is ignored by the deserializer.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Hours of the day sampled for the timeline strip.
pub const TIMELINE_HOURS: [usize; 6] = [9, 12, 15, 18, 21, 23];

/// Condition code of the moon icon, used for nighttime and the midnight slot.
pub const NIGHT_CODE: &str = "999";

// ─── Inbound payload ────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub code: i32,
    pub icon: String,
    pub text: String,
}

impl Condition {
    /// Icon URLs end in `/NNN.png`; the icon set is keyed by that 3-digit stem.
    pub fn icon_code(&self) -> String {
        self.icon
            .len()
            .checked_sub(7)
            .and_then(|start| self.icon.get(start..start + 3))
            .map(str::to_string)
            .unwrap_or_else(|| self.code.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub condition: Condition,
    #[serde(default)]
    pub temp_c: Option<f64>,
    pub feelslike_c: f64,
    pub humidity: i32,
    pub is_day: i32,
    pub last_updated: String,
    pub precip_mm: f64,
}

impl CurrentWeather {
    // temp_c is occasionally absent from the payload; feelslike_c stands in.
    pub fn display_temp(&self) -> String {
        format_temp(self.temp_c.unwrap_or(self.feelslike_c))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiLocation {
    pub name: String,
    pub region: String,
    pub country: String,
    pub tz_id: String,
    pub localtime: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyForecast {
    pub condition: Condition,
    pub temp_c: f64,
    pub is_day: i32,
    pub time: String,
    pub will_it_rain: i32,
    pub will_it_snow: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaySummary {
    pub condition: Condition,
    pub avgtemp_c: f64,
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub daily_will_it_rain: i32,
    pub daily_will_it_snow: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub astro: Astro,
    pub day: DaySummary,
    pub hour: Vec<HourlyForecast>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentWeather,
    pub location: ApiLocation,
    pub forecast: Forecast,
}

// ─── Outbound reports ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct TimelineSlot {
    pub hour: usize,
    pub temp: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub local_date: String,
    pub local_time: String,
    pub temp: String,
    pub condition: String,
    pub code: String,
    pub humidity: i32,
    pub precip_mm: f64,
    pub timeline: Vec<TimelineSlot>,
    pub progress: i32,
}

impl WeatherReport {
    pub fn from_forecast(data: &ForecastResponse) -> Self {
        let mut timeline = data
            .forecast
            .forecastday
            .first()
            .map(|d| timeline(&d.hour))
            .unwrap_or_default();
        // The 23h slot always shows the moon.
        if let Some(last) = timeline.last_mut() {
            last.code = NIGHT_CODE.to_string();
        }

        let (local_date, local_time) = split_localtime(&data.location.localtime);
        let progress = parse_local_time(&data.location.localtime)
            .map(daily_progress)
            .unwrap_or(0);

        let code = if data.current.is_day == 0 {
            NIGHT_CODE.to_string()
        } else {
            data.current.condition.icon_code()
        };

        WeatherReport {
            city: data.location.name.clone(),
            country: data.location.country.clone(),
            local_date,
            local_time,
            temp: data.current.display_temp(),
            condition: data.current.condition.text.clone(),
            code,
            humidity: data.current.humidity,
            precip_mm: data.current.precip_mm,
            timeline,
            progress,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TomorrowReport {
    pub city: String,
    pub date: String,
    pub avg_temp: String,
    pub code: String,
    pub condition: String,
    pub timeline: Vec<TimelineSlot>,
}

impl TomorrowReport {
    /// `None` when the payload carries fewer than two forecast days.
    pub fn from_forecast(data: &ForecastResponse) -> Option<Self> {
        let day = data.forecast.forecastday.get(1)?;
        Some(TomorrowReport {
            city: data.location.name.to_uppercase(),
            date: format_date(&day.date).unwrap_or_else(|| day.date.clone()),
            avg_temp: format_temp(day.day.avgtemp_c),
            code: day.day.condition.icon_code(),
            condition: day.day.condition.text.clone(),
            timeline: timeline(&day.hour),
        })
    }
}

// ─── Shaping helpers ────────────────────────────────────────────

/// Round to a whole degree and add the degree sign.
pub fn format_temp(temp_c: f64) -> String {
    format!("{}º", temp_c.round() as i64)
}

/// `YYYY-MM-DD` → upper-case `MONTH DD` (e.g. `AUGUST 21`).
pub fn format_date(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%B %d").to_string().to_uppercase())
}

pub fn timeline(hours: &[HourlyForecast]) -> Vec<TimelineSlot> {
    TIMELINE_HOURS
        .iter()
        .filter_map(|&h| {
            hours.get(h).map(|f| TimelineSlot {
                hour: h,
                temp: format_temp(f.temp_c),
                code: f.condition.icon_code(),
            })
        })
        .collect()
}

fn split_localtime(localtime: &str) -> (String, String) {
    let mut parts = localtime.split_whitespace();
    let date = parts.next().unwrap_or_default().to_string();
    let time = parts.next().unwrap_or_default().to_string();
    (date, time)
}

// The provider omits the leading zero on single-digit hours; going through
// split_whitespace also swallows the stray leading space that comes with it.
fn parse_local_time(localtime: &str) -> Option<NaiveTime> {
    let time_part = localtime.split_whitespace().nth(1)?;
    NaiveTime::parse_from_str(time_part, "%H:%M").ok()
}

/// X offset of the "now" marker on the 133px daily timeline. Each hour block
/// is a third of the square; minutes before the 232.5-minute mark sit left of
/// the visible strip.
pub fn daily_progress(time: NaiveTime) -> i32 {
    let minutes_elapsed = (time.hour() * 60 + time.minute()) as f64;
    let w = 133.0 / 3.0;
    let m = w / 60.0;
    (m * minutes_elapsed - 232.5) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(code: i32, icon_stem: &str) -> Condition {
        Condition {
            code,
            icon: format!("//cdn.weatherapi.com/weather/64x64/day/{icon_stem}.png"),
            text: "Partly cloudy".to_string(),
        }
    }

    fn sample_hours() -> Vec<HourlyForecast> {
        (0..24)
            .map(|h| HourlyForecast {
                condition: condition(1003, "116"),
                temp_c: 10.0 + h as f64,
                is_day: i32::from((6..20).contains(&h)),
                time: format!("2024-08-20 {h}:00"),
                will_it_rain: 0,
                will_it_snow: 0,
            })
            .collect()
    }

    fn sample_forecast(days: usize, is_day: i32, localtime: &str) -> ForecastResponse {
        ForecastResponse {
            current: CurrentWeather {
                condition: condition(1003, "116"),
                temp_c: Some(21.4),
                feelslike_c: 19.8,
                humidity: 60,
                is_day,
                last_updated: "2024-08-20 12:00".to_string(),
                precip_mm: 0.1,
            },
            location: ApiLocation {
                name: "Springfield".to_string(),
                region: "Illinois".to_string(),
                country: "United States".to_string(),
                tz_id: "America/Chicago".to_string(),
                localtime: localtime.to_string(),
            },
            forecast: Forecast {
                forecastday: (0..days)
                    .map(|d| ForecastDay {
                        date: format!("2024-08-{}", 20 + d),
                        astro: Astro {
                            sunrise: "06:12 AM".to_string(),
                            sunset: "07:54 PM".to_string(),
                            moonrise: "08:01 PM".to_string(),
                            moonset: "05:33 AM".to_string(),
                            moon_phase: "Full Moon".to_string(),
                        },
                        day: DaySummary {
                            condition: condition(1006, "119"),
                            avgtemp_c: 22.6,
                            maxtemp_c: 27.0,
                            mintemp_c: 17.2,
                            daily_will_it_rain: 0,
                            daily_will_it_snow: 0,
                        },
                        hour: sample_hours(),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_format_temp_rounds_and_suffixes() {
        assert_eq!(format_temp(21.4), "21º");
        assert_eq!(format_temp(21.6), "22º");
        assert_eq!(format_temp(-3.5), "-4º");
    }

    #[test]
    fn test_icon_code_from_url() {
        assert_eq!(condition(1003, "116").icon_code(), "116");
    }

    #[test]
    fn test_icon_code_falls_back_to_numeric_code() {
        let c = Condition {
            code: 1003,
            icon: "px".to_string(),
            text: String::new(),
        };
        assert_eq!(c.icon_code(), "1003");
    }

    #[test]
    fn test_format_date_upper_month() {
        assert_eq!(format_date("2024-08-21").unwrap(), "AUGUST 21");
        assert_eq!(format_date("2024-01-05").unwrap(), "JANUARY 05");
        assert!(format_date("yesterday").is_none());
    }

    #[test]
    fn test_daily_progress_noon() {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(daily_progress(noon), 299);
    }

    #[test]
    fn test_daily_progress_early_morning_is_off_strip() {
        let three = NaiveTime::from_hms_opt(3, 0, 0).unwrap();
        assert_eq!(daily_progress(three), -99);
    }

    #[test]
    fn test_timeline_samples_fixed_hours() {
        let slots = timeline(&sample_hours());
        assert_eq!(
            slots.iter().map(|s| s.hour).collect::<Vec<_>>(),
            TIMELINE_HOURS.to_vec()
        );
        assert_eq!(slots[0].temp, "19º");
        assert_eq!(slots[0].code, "116");
    }

    #[test]
    fn test_report_caps_timeline_with_moon() {
        let report = WeatherReport::from_forecast(&sample_forecast(3, 1, "2024-08-20 12:00"));
        assert_eq!(report.timeline.last().unwrap().code, NIGHT_CODE);
        assert_eq!(report.code, "116");
        assert_eq!(report.temp, "21º");
        assert_eq!(report.local_date, "2024-08-20");
        assert_eq!(report.local_time, "12:00");
        assert_eq!(report.progress, 299);
    }

    #[test]
    fn test_report_uses_moon_code_at_night() {
        let report = WeatherReport::from_forecast(&sample_forecast(3, 0, "2024-08-20 23:55"));
        assert_eq!(report.code, NIGHT_CODE);
    }

    #[test]
    fn test_report_handles_single_digit_hour() {
        let report = WeatherReport::from_forecast(&sample_forecast(3, 1, "2024-08-20 1:55"));
        assert_eq!(report.local_time, "1:55");
        // 115 minutes elapsed, well left of the strip
        assert_eq!(report.progress, daily_progress(NaiveTime::from_hms_opt(1, 55, 0).unwrap()));
    }

    #[test]
    fn test_tomorrow_uses_second_day() {
        let report = TomorrowReport::from_forecast(&sample_forecast(3, 1, "2024-08-20 12:00"))
            .unwrap();
        assert_eq!(report.city, "SPRINGFIELD");
        assert_eq!(report.date, "AUGUST 21");
        assert_eq!(report.avg_temp, "23º");
        assert_eq!(report.code, "119");
        // no moon cap on tomorrow's strip
        assert_eq!(report.timeline.last().unwrap().code, "116");
    }

    #[test]
    fn test_tomorrow_missing_day_is_none() {
        assert!(TomorrowReport::from_forecast(&sample_forecast(1, 1, "2024-08-20 12:00")).is_none());
    }
}
