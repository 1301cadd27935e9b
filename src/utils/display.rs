//! Display and printing utilities

use tracing::info;
use crate::{
    series::CommoditySeries,
    types::LeadRecord,
    config::LEDGER_DATE_FORMAT,
};

pub fn print_commodity_series(series: &CommoditySeries) {
    info!("\n📡 {} Price Trend - {}", series.commodity, series.hub);
    info!("   Base Price: ₹{:.2}/MT", series.base_price);
    if let Some(last) = series.last_close() {
        info!("   Last Close: ₹{:.2}/MT", last);
    }
    if let Some(change) = series.change_pct() {
        info!("   Window Change: {:+.2}%", change);
    }
    info!("   {:<17} {:>12} {:>12} {:>12} {:>12}", "Date", "Open", "High", "Low", "Close");
    for point in &series.points {
        info!(
            "   {:<17} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            point.timestamp.format(LEDGER_DATE_FORMAT),
            point.open,
            point.high,
            point.low,
            point.close
        );
    }
}

pub fn print_lead(record: &LeadRecord) {
    info!("\n✅ LEAD CAPTURED");
    info!("   Company:  {}", record.company);
    info!("   Industry: {}", record.industry);
    info!("   Region:   {}", record.region);
    info!("   Material: {} ({} MT)", record.material, record.volume);
    info!("   Status:   {}", record.status);
}

pub fn print_ledger(records: &[LeadRecord]) {
    info!("\n📋 Lead Ledger ({} records)", records.len());
    if records.is_empty() {
        info!("   No leads captured yet");
        return;
    }
    for record in records {
        info!(
            "   {} | {:<20} | {:<12} | {:<10} | {:<14} | {:>10} MT | {}",
            record.submitted_at.format(LEDGER_DATE_FORMAT),
            record.company,
            record.industry,
            record.region,
            record.material,
            record.volume,
            record.status
        );
    }
}
