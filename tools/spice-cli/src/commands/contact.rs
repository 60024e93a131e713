//! Contact-form submission.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use serde::Serialize;
use spice_catalog::prelude::*;
use tracing::info;

use super::ContactArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ContactReport<'a> {
    notice: &'a Notice,
    request: &'a ContactRequest,
}

/// Run the contact command.
pub fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let interactive = !args.no_input && !ctx.output.is_json();
    let form = if interactive {
        prompt_form(args)?
    } else {
        ContactForm {
            name: args.name.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
            phone: args.phone.unwrap_or_default(),
            inquiry_type: args.inquiry,
            message: args.message.unwrap_or_default(),
            captcha: args.captcha.unwrap_or_default(),
        }
    };

    let request = match review(&form) {
        Ok(request) => request,
        Err(notice) => {
            if ctx.output.is_json() {
                ctx.output.json(&notice);
            } else {
                ctx.output.notice(&notice);
            }
            bail!("Contact form was not sent");
        }
    };
    info!(inquiry = request.inquiry_type.as_str(), "contact request accepted");

    let notice = Notice::submitted();
    if ctx.output.is_json() {
        ctx.output.json(&ContactReport {
            notice: &notice,
            request: &request,
        });
        return Ok(());
    }

    ctx.output.notice(&notice);
    ctx.output.kv("Name", &request.name);
    ctx.output.kv("Email", &request.email);
    ctx.output.kv("Phone", &request.phone);
    ctx.output.kv("Inquiry", request.inquiry_type.label());

    Ok(())
}

/// Validate a submission; a rejection becomes the notice shown to the visitor.
fn review(form: &ContactForm) -> Result<ContactRequest, Notice> {
    form.validate().map_err(|err| Notice::from(&err))
}

/// Fill any field not given on the command line.
fn prompt_form(args: ContactArgs) -> Result<ContactForm> {
    let name = or_prompt(args.name, "Full name")?;
    let email = or_prompt(args.email, "Email address")?;
    let phone = or_prompt(args.phone, "Phone number")?;

    let inquiry_type = match args.inquiry {
        Some(inquiry) => inquiry,
        None => {
            let labels: Vec<&str> = InquiryType::ALL.iter().map(|t| t.label()).collect();
            let selection = Select::new()
                .with_prompt("Inquiry type")
                .items(&labels)
                .default(0)
                .interact()?;
            InquiryType::ALL[selection].as_str().to_string()
        }
    };

    let message = or_prompt(args.message, "Message")?;
    let captcha = or_prompt(args.captcha, "What is 5 + 3?")?;

    Ok(ContactForm {
        name,
        email,
        phone,
        inquiry_type: Some(inquiry_type),
        message,
        captcha,
    })
}

fn or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
    }
}
