use il_met_decode::WeatherBulletin;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <bulletin.json>", args[0]);
        std::process::exit(1);
    }

    let file = std::fs::File::open(&args[1])?;
    let bulletin = WeatherBulletin::from_reader(file)?;

    if bulletin.is_empty() {
        println!("No weather data");
        return Ok(());
    }

    println!("=== Warnings ({}) ===", bulletin.warnings.len());
    for warning in bulletin.decoded_warnings() {
        println!("{} {}", warning.kind, warning.number.as_deref().unwrap_or("-"));
        if let Some(fir) = &warning.fir {
            println!("   Location: {}", fir);
        }
        if let (Some(from), Some(to)) = (&warning.valid_from, &warning.valid_to) {
            println!("   Valid: {} - {}", from, to);
        }
        if let Some(phenomenon) = &warning.phenomenon {
            println!("   Phenomenon: {}", phenomenon);
        }
        for coord in &warning.polygon {
            println!("   Point: {}", coord.format());
        }
        if let Some(levels) = &warning.flight_levels {
            println!("   Levels: {}", levels);
        }
        if let Some(trend) = warning.trend {
            println!("   Trend: {}", trend);
        }
    }

    println!("\n=== ATIS ({}) ===", bulletin.atis.len());
    for atis in bulletin.decoded_atis() {
        if !atis.has_data() {
            println!("{}", atis.raw);
            continue;
        }

        println!(
            "{} {}",
            atis.station.as_deref().unwrap_or("????"),
            atis.time.as_deref().unwrap_or("")
        );
        for wind in &atis.runway_winds {
            println!("   RWY {}: {}/{}KT", wind.rwy, wind.direction, wind.speed);
        }
        if let (Some(t), Some(dp)) = (&atis.temperature, &atis.dew_point) {
            println!("   Temperature: {}°C / {}°C", t, dp);
        }
        if let Some(qnh) = &atis.qnh {
            println!("   QNH: {} hPa", qnh);
        }
    }

    println!("\n=== METAR ({}) ===", bulletin.metars.len());
    for metar in &bulletin.metars {
        println!("{}", metar);
    }

    println!("\n=== TAF ({}) ===", bulletin.tafs.len());
    for taf in &bulletin.tafs {
        println!("{}", taf.join("\n    "));
    }

    Ok(())
}
