//! Report rendering for the terminal.

use anyhow::Result;
use clap::ValueEnum;
use mispricing::{
    MispricingReport,
    analysis::{SentimentReport, reclassified_frame},
    report::BusinessQuality,
};

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print a report in the requested format.
pub(crate) fn print_report(report: &MispricingReport, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(report)?),
        Format::Text => print_text(report)?,
    }
    Ok(())
}

pub(crate) fn header(title: &str) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║ {title:<60} ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
}

fn section(title: &str) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{title}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

fn print_text(report: &MispricingReport) -> Result<()> {
    header(&format!("{} ({})", report.company_name, report.ticker));

    let pillars = &report.pillars;
    print_business_quality(&pillars.business_quality)?;

    section("2. CONTRARIAN ANALYSIS");
    if let Some(quote) = &pillars.contrarian_analysis.market_data {
        if let Some(price) = quote.price {
            println!("Price:          {price:.2}");
        }
        if let Some(position) = quote.range_position() {
            println!("52-week range:  {:.0}% of the way from low to high", position * 100.0);
        }
        println!();
    }
    print_sentiment(&pillars.contrarian_analysis.news_sentiment);
    println!("Checklist:");
    for item in pillars.contrarian_analysis.munger_checklist {
        println!("  • {}: {}", item.bias, item.question);
    }
    println!();

    section("3. VALUATION");
    let valuation = &pillars.valuation.valuation_analysis;
    let epv = &valuation.earnings_power_value;
    println!("FCF yield:        {:>16.2}%", valuation.free_cash_flow_yield);
    println!("Normalized EBIT:  {:>16}", epv.normalized_ebit);
    println!("Net debt:         {:>16}", epv.net_debt);
    println!("EPV (equity):     {:>16}", epv.epv_equity);
    println!();

    section("4. CATALYSTS");
    println!("{:<12} {:<8} Evidence", "Type", "Status");
    println!("{}", "─".repeat(64));
    for guidepost in &pillars.catalysts.guideposts {
        println!(
            "{:<12} {:<8} {}",
            format!("{:?}", guidepost.kind),
            format!("{:?}", guidepost.status).to_lowercase(),
            guidepost.evidence
        );
        if let Some(link) = &guidepost.link {
            println!("{:<21} {link}", "");
        }
    }
    println!();

    Ok(())
}

fn print_business_quality(pillar: &BusinessQuality) -> Result<()> {
    section("1. BUSINESS QUALITY");

    if let Some(profile) = &pillar.company_profile {
        let sector = profile.sector.as_deref().unwrap_or("-");
        let industry = profile.industry.as_deref().unwrap_or("-");
        println!("Sector:   {sector} / {industry}\n");
    }

    if pillar.reclassified_cash_flow_analysis.is_empty() {
        println!("No fiscal year has full statement coverage.\n");
    } else {
        let df = reclassified_frame(&pillar.reclassified_cash_flow_analysis)?;
        println!("{df}\n");
    }

    for (form, link) in &pillar.sec_filings {
        println!("Latest {form:<5} {link}");
    }
    println!();
    Ok(())
}

fn print_sentiment(sentiment: &SentimentReport) {
    let summary = &sentiment.summary;
    println!(
        "News sentiment: {} positive, {} negative, {} neutral ({} articles)\n",
        summary.positive_count, summary.negative_count, summary.neutral_count, summary.total_articles
    );
    for record in &sentiment.articles {
        println!("  {:<9} {}", format!("{:?}", record.sentiment_label), record.text);
    }
    if !sentiment.articles.is_empty() {
        println!();
    }
}
