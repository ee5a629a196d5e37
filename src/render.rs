use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::catalog::CatalogQuery;
use crate::model::{DEFAULT_RISK_SCORE, Profile};
use crate::util::clamp_text;

pub const AGGRESSOR_CAPTION: &str = "加害";
pub const VICTIM_CAPTION: &str = "受害";
pub const EMPTY_SECTION: &str = "無資料";

const RISK_BAR_CELLS: usize = 20;
const PREVIEW_LINES: usize = 3;
const PREVIEW_CHARS: usize = 120;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum DetailTab {
    Core,
    Deep,
    Real,
    All,
}

impl DetailTab {
    pub fn title(self) -> &'static str {
        match self {
            Self::Core => "核心",
            Self::Deep => "深層",
            Self::Real => "實戰",
            Self::All => "全部",
        }
    }

    fn expand(self) -> &'static [DetailTab] {
        match self {
            Self::Core => &[Self::Core],
            Self::Deep => &[Self::Deep],
            Self::Real => &[Self::Real],
            Self::All => &[Self::Core, Self::Deep, Self::Real],
        }
    }
}

fn tab_sections(profile: &Profile, tab: DetailTab) -> Vec<(&'static str, &str)> {
    match tab {
        DetailTab::Core => vec![
            ("情緒", profile.emotional.as_str()),
            ("認知", profile.cognitive.as_str()),
            ("行為", profile.behavioral.as_str()),
            ("依附", profile.attachment.as_str()),
        ],
        DetailTab::Deep => vec![
            ("背景", profile.background.as_str()),
            ("控制", profile.control.as_str()),
            ("順從", profile.submission.as_str()),
            ("防衛", profile.defense.as_str()),
        ],
        DetailTab::Real => vec![
            ("互動", profile.interaction.as_str()),
            ("內在", profile.dialogue.as_str()),
            ("冷讀切入", profile.cold_read.as_str()),
            ("案例", profile.case_study.as_str()),
        ],
        DetailTab::All => Vec::new(),
    }
}

pub fn write_category_bar<W: Write>(out: &mut W, categories: &[String], active: &str) -> Result<()> {
    let badges = categories
        .iter()
        .map(|category| {
            if category == active {
                format!("[{category}]")
            } else {
                format!(" {category} ")
            }
        })
        .collect::<Vec<String>>();
    writeln!(out, "{}", badges.join(" "))?;
    Ok(())
}

pub fn write_card_list<W: Write>(
    out: &mut W,
    query: &CatalogQuery,
    total: usize,
    profiles: &[&Profile],
) -> Result<()> {
    let search = if query.search.is_empty() {
        "(none)"
    } else {
        query.search.as_str()
    };
    writeln!(
        out,
        "Search: {search}\tCategory: {}\tShowing: {}/{total}",
        query.category,
        profiles.len()
    )?;

    if profiles.is_empty() {
        writeln!(out, "No profiles match.")?;
        return Ok(());
    }

    for profile in profiles {
        writeln!(out)?;
        write_card(out, profile)?;
    }
    Ok(())
}

pub fn write_card<W: Write>(out: &mut W, profile: &Profile) -> Result<()> {
    writeln!(out, "#{}\t[{}]", profile.id, profile.category)?;
    writeln!(out, "{}", profile.title)?;
    for line in clamp_text(&profile.emotional, PREVIEW_LINES, PREVIEW_CHARS).lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(
        out,
        "{} {AGGRESSOR_CAPTION} {}  {} {VICTIM_CAPTION} {}",
        risk_marker(profile.risk.aggressor),
        format_score(profile.risk.aggressor),
        risk_marker(profile.risk.victim),
        format_score(profile.risk.victim),
    )?;
    Ok(())
}

pub fn write_detail<W: Write>(out: &mut W, profile: &Profile, tab: DetailTab) -> Result<()> {
    writeln!(out, "#{}  {}", profile.id, profile.title)?;
    writeln!(out, "[{}]", profile.category)?;
    writeln!(out, "{}", risk_bar(AGGRESSOR_CAPTION, profile.risk.aggressor))?;
    writeln!(out, "{}", risk_bar(VICTIM_CAPTION, profile.risk.victim))?;

    for section_tab in tab.expand() {
        writeln!(out)?;
        writeln!(out, "== {} ==", section_tab.title())?;
        for (heading, body) in tab_sections(profile, *section_tab) {
            writeln!(out, "-- {heading}")?;
            let body = if body.is_empty() { EMPTY_SECTION } else { body };
            for line in body.lines() {
                writeln!(out, "   {line}")?;
            }
        }
    }
    Ok(())
}

pub fn risk_marker(score: f64) -> char {
    if score > DEFAULT_RISK_SCORE { '●' } else { '○' }
}

/// Bar filled to `score * 10` percent, clamped to the 0-100 range for display.
pub fn risk_bar(label: &str, score: f64) -> String {
    let percent = (score * 10.0).clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * RISK_BAR_CELLS as f64).round() as usize;
    format!(
        "{label} {}{} {}",
        "█".repeat(filled),
        "░".repeat(RISK_BAR_CELLS - filled),
        format_score(score)
    )
}

pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        score.to_string()
    }
}
