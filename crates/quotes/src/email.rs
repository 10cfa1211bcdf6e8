//! HTML email rendering for quote requests.
//!
//! Two bodies per submission: a business-facing notification and a customer
//! acknowledgment. All interpolated user input is HTML-escaped.

use crate::request::QuoteRequest;

pub const CUSTOMER_SUBJECT: &str = "Quote Request Received - SUDOOD";

pub fn business_subject(request: &QuoteRequest) -> String {
    format!("New Quote Request: {}", request.product_name)
}

/// Minimal HTML entity escaping for text interpolated into the bodies.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_owned()
    } else {
        escape_html(value)
    }
}

/// The notification sent to the business inbox.
pub fn render_business_email(request: &QuoteRequest) -> String {
    let notes_block = if request.notes.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"
        <div style="background-color: #fff9e6; padding: 15px; border-left: 4px solid #f39c12; margin-bottom: 20px;">
          <h3 style="color: #2c3e50; margin-top: 0;">Additional Notes</h3>
          <p style="white-space: pre-wrap; color: #34495e; margin: 0;">{}</p>
        </div>"#,
            escape_html(&request.notes)
        )
    };

    format!(
        r#"<div style="font-family: Arial, sans-serif; color: #333; max-width: 600px; margin: 0 auto;">
        <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 20px;">
          <h1 style="color: #2c3e50; margin: 0;">New Quote Request</h1>
          <p style="color: #7f8c8d; margin: 5px 0 0 0;">From SUDOOD Website</p>
        </div>

        <div style="background-color: #e8f4f8; padding: 15px; border-left: 4px solid #3498db; margin-bottom: 20px;">
          <h3 style="color: #2c3e50; margin-top: 0;">Product Information</h3>
          <p style="margin: 5px 0;"><strong>Product:</strong> {product}</p>
          <p style="margin: 5px 0;"><strong>Category:</strong> {category}</p>
          <p style="margin: 5px 0;"><strong>Series:</strong> {series}</p>
          <p style="margin: 5px 0;"><strong>Quantity:</strong> {quantity}</p>
        </div>

        <div style="background-color: #f0f0f0; padding: 15px; border-radius: 8px; margin-bottom: 20px;">
          <h3 style="color: #2c3e50; margin-top: 0;">Customer Information</h3>
          <p style="margin: 5px 0;"><strong>Name:</strong> {name}</p>
          <p style="margin: 5px 0;"><strong>Company:</strong> {company}</p>
          <p style="margin: 5px 0;"><strong>Email:</strong> {email}</p>
          <p style="margin: 5px 0;"><strong>Phone:</strong> {phone}</p>
        </div>
        {notes_block}
        <div style="text-align: center; padding-top: 20px; border-top: 1px solid #ecf0f1;">
          <p style="color: #7f8c8d; font-size: 12px;">
            This is an automated message from the SUDOOD website quote system.
          </p>
        </div>
      </div>"#,
        product = escape_html(&request.product_name),
        category = escape_html(&request.category),
        series = escape_html(&request.series),
        quantity = escape_html(&request.quantity),
        name = escape_html(&request.name),
        company = or_placeholder(&request.company, "N/A"),
        email = escape_html(&request.email),
        phone = escape_html(&request.phone),
        notes_block = notes_block,
    )
}

/// The acknowledgment sent back to the submitter.
pub fn render_customer_email(request: &QuoteRequest) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; color: #333; max-width: 600px; margin: 0 auto;">
        <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 20px;">
          <h1 style="color: #2c3e50; margin: 0;">Quote Request Received</h1>
          <p style="color: #7f8c8d; margin: 5px 0 0 0;">Thank you for choosing SUDOOD</p>
        </div>

        <p style="font-size: 16px; color: #34495e;">Dear {name},</p>

        <p style="color: #34495e; line-height: 1.6;">
          Thank you for your interest in our products. We have received your quote request for:
        </p>

        <div style="background-color: #e8f4f8; padding: 15px; border-left: 4px solid #3498db; margin-bottom: 20px; border-radius: 4px;">
          <p style="margin: 5px 0;"><strong>{product}</strong></p>
          <p style="margin: 5px 0; color: #7f8c8d;">Quantity: {quantity}</p>
        </div>

        <p style="color: #34495e; line-height: 1.6;">
          Our sales team will review your request and contact you within 24-48 hours with a detailed quotation and any additional information you may need.
        </p>

        <div style="background-color: #f0f0f0; padding: 15px; border-radius: 8px; margin: 20px 0;">
          <h3 style="color: #2c3e50; margin-top: 0;">Your Information</h3>
          <p style="margin: 5px 0; color: #34495e;"><strong>Email:</strong> {email}</p>
          <p style="margin: 5px 0; color: #34495e;"><strong>Phone:</strong> {phone}</p>
          <p style="margin: 5px 0; color: #34495e;"><strong>Company:</strong> {company}</p>
        </div>

        <p style="color: #34495e; line-height: 1.6;">
          If you have any urgent questions, please feel free to call us directly at your earliest convenience.
        </p>

        <div style="text-align: center; padding: 30px 0; border-top: 1px solid #ecf0f1;">
          <p style="color: #7f8c8d; font-size: 14px; margin: 10px 0;">
            <strong>SUDOOD - Water Valves &amp; Solutions</strong>
          </p>
          <p style="color: #95a5a6; font-size: 12px; margin: 5px 0;">
            Thank you for your interest in SUDOOD products.
          </p>
        </div>
      </div>"#,
        name = escape_html(&request.name),
        product = escape_html(&request.product_name),
        quantity = escape_html(&request.quantity),
        email = escape_html(&request.email),
        phone = escape_html(&request.phone),
        company = or_placeholder(&request.company, "Not provided"),
    )
}
