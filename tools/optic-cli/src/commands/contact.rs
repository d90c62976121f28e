//! Contact form command.

use anyhow::{Context as _, Result};
use optic_commerce::inquiry::{ContactInquiry, LogSink};

use super::ContactArgs;
use crate::context::Context;

/// Run the contact command.
pub fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let inquiry = ContactInquiry {
        name: args.name,
        email: args.email,
        phone: args.phone,
        business_name: args.business_name.filter(|b| !b.trim().is_empty()),
        city: args.city,
        inquiry_type: args.inquiry_type,
        message: args.message,
    };

    let store = ctx.open_storefront()?;
    store
        .send_contact(&inquiry, &mut LogSink)
        .context("Failed to send inquiry")?;

    if ctx.output.is_json() {
        ctx.output.json(&inquiry);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Thank you, {}. Your {} has been sent to {}.",
        inquiry.name,
        inquiry.inquiry_type.display_name().to_lowercase(),
        ctx.config.store.name
    ));
    ctx.output.info("We'll get back to you within 24 hours.");

    Ok(())
}
