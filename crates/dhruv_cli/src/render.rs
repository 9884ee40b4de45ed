//! Plain-text chart rendering.

use std::fmt::Write;

use dhruv_kundali::{Chart, ChartResult, LagnaEntry, PlanetPosition};
use dhruv_vedic_base::deg_to_dms;

fn hemisphere(value: f64, pos: char, neg: char) -> String {
    format!("{:.4}°{}", value.abs(), if value < 0.0 { neg } else { pos })
}

fn flags(p: &PlanetPosition) -> String {
    let mut out = Vec::new();
    if p.retrograde {
        out.push("R");
    }
    if p.combust {
        out.push("C");
    }
    if p.exalted {
        out.push("Ex");
    }
    if p.debilitated {
        out.push("Db");
    }
    out.join(" ")
}

fn lagna_line(out: &mut String, label: &str, l: &LagnaEntry) -> std::fmt::Result {
    writeln!(
        out,
        "  {:<8} {:>9.4}°  {:<22} {:>8}  {:<18} pada {}  {}",
        label,
        l.sidereal_longitude,
        l.rashi.to_string(),
        l.dms.to_string(),
        l.nakshatra.name(),
        l.pada,
        l.nari
    )
}

fn d1_block(out: &mut String, chart: &Chart) -> std::fmt::Result {
    lagna_line(out, "Lagna", &chart.lagna)?;
    for p in &chart.planets {
        writeln!(
            out,
            "  {:<8} {:>9.4}°  {:<22} {:>8}  {:<18} pada {}  {}",
            p.name,
            p.sidereal_longitude,
            p.rashi.to_string(),
            p.dms.to_string(),
            p.nakshatra.name(),
            p.pada,
            flags(p)
        )?;
    }
    Ok(())
}

fn signs_line(chart: &Chart) -> String {
    chart
        .planets
        .iter()
        .map(|p| format!("{} {}", p.name, p.rashi.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

/// Text table for a full chart.
pub fn chart_text(c: &ChartResult) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "Chart for {} at {}, {}",
        c.input.moment,
        hemisphere(c.input.latitude_deg, 'N', 'S'),
        hemisphere(c.input.longitude_deg, 'E', 'W')
    )?;
    writeln!(out, "Ayanamsa: {:.6}° ({})\n", c.ayanamsa, deg_to_dms(c.ayanamsa))?;

    writeln!(out, "D1 (Rashi)")?;
    d1_block(&mut out, &c.d1)?;
    writeln!(out)?;

    for v in &c.vargas {
        writeln!(out, "{} ({})", v.varga, v.varga.sanskrit_name())?;
        lagna_line(&mut out, "Lagna", &v.chart.lagna)?;
        writeln!(out, "  {}", signs_line(&v.chart))?;
    }
    writeln!(out)?;

    writeln!(out, "Chandra Lagna")?;
    lagna_line(&mut out, "Moon", &c.chandra.lagna)?;
    writeln!(out)?;

    let d = &c.dosha;
    writeln!(out, "Doshas")?;
    writeln!(
        out,
        "  Manglik:   {} (from lagna: {}, from moon: {})",
        yes_no(d.manglik.is_manglik),
        yes_no(d.manglik.from_lagna),
        yes_no(d.manglik.from_moon)
    )?;
    writeln!(out, "  Sade Sati: {}", d.sade_sati.phase)?;
    writeln!(
        out,
        "  Nakshatra: lagna {} ({}), moon {} ({})",
        d.nakshatra.lagna.name(),
        d.nakshatra.lagna_nari,
        d.nakshatra.moon.name(),
        d.nakshatra.nari
    )?;
    Ok(out)
}
