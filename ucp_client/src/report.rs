//! Human-readable output of settlement API results for the CLI.
use ucp_common::{Quote, Recipient, Settlement, SettlementToken};

pub fn print_quote(quote: &Quote) {
    println!(
        "   Quote: {} {} = {} {}",
        quote.from_amount,
        quote.from_currency,
        quote.to_amount,
        quote.payout_currency()
    );
    println!("   Rate: {}, Fees: {} {}", quote.fx_rate, quote.fees, quote.from_currency);
    println!("   Expires: {}", quote.expires_at.to_rfc3339());
}

pub fn print_token(token: &SettlementToken) {
    println!("   Token: {}", token.preview());
    println!("   Settlement ID: {}", token.settlement_id);
    println!("   Locked rate: {}", token.quote.fx_rate);
    println!("   Expires: {}", token.expires_at.to_rfc3339());
}

pub fn print_settlement(settlement: &Settlement) {
    println!("   Settlement ID: {}", settlement.id);
    println!("   Status: {}", settlement.status);
    if let Some(eta) = settlement.estimated_completion {
        println!("   Estimated completion: {}", eta.to_rfc3339());
    }
    if let Some(transfer_id) = &settlement.transfer_id {
        println!("   Transfer ID: {}", transfer_id);
    }
    if let Some(done) = settlement.completed_at {
        println!("   Completed at: {}", done.to_rfc3339());
    }
    if let Some(reason) = &settlement.failure_reason {
        println!("   Failure reason: {}", reason);
    }
}

pub fn print_summary(token: &SettlementToken, recipient: &Recipient) {
    println!("Settlement complete!");
    println!(
        "   Amount sent: {} {}",
        token.quote.to_amount,
        token.quote.payout_currency()
    );
    println!("   Recipient: {} ({})", recipient.name(), recipient.address());
}
