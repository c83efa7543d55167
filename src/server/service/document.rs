//! PDF rendering for payment invoices and user profile reports.
//!
//! Documents are laid out top-down on A4 pages using the built-in Helvetica fonts, so
//! no font files need to ship with the server. Text that would run past the bottom
//! margin continues on a new page.

use chrono::Utc;
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::server::{
    error::AppError,
    model::{billing::Billing, land::Land, payment::Payment, user::User},
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LINE_HEIGHT: f32 = 7.0;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 11.0;

fn pdf_error(e: printpdf::Error) -> AppError {
    AppError::InternalError(format!("Failed to render PDF: {:?}", e))
}

/// Cursor over the current page that starts a new page when space runs out.
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self, AppError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN,
        })
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y - height < MARGIN {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn write_at(&mut self, text: &str, size: f32, x: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn title(&mut self, text: &str) {
        self.ensure_space(LINE_HEIGHT * 2.0);
        self.write_at(text, TITLE_SIZE, MARGIN, true);
        self.y -= LINE_HEIGHT * 2.0;
    }

    fn heading(&mut self, text: &str) {
        self.y -= LINE_HEIGHT / 2.0;
        self.ensure_space(LINE_HEIGHT * 1.5);
        self.write_at(text, HEADING_SIZE, MARGIN, true);
        self.y -= LINE_HEIGHT * 1.5;
    }

    fn line(&mut self, text: &str) {
        self.ensure_space(LINE_HEIGHT);
        self.write_at(text, BODY_SIZE, MARGIN, false);
        self.y -= LINE_HEIGHT;
    }

    fn field(&mut self, label: &str, value: &str) {
        self.ensure_space(LINE_HEIGHT);
        self.write_at(label, BODY_SIZE, MARGIN, true);
        self.write_at(value, BODY_SIZE, MARGIN + 45.0, false);
        self.y -= LINE_HEIGHT;
    }

    /// Writes one row of left-aligned cells at the given x offsets.
    fn row(&mut self, cells: &[(&str, f32)], bold: bool) {
        self.ensure_space(LINE_HEIGHT);
        for (text, x) in cells {
            self.write_at(text, BODY_SIZE, MARGIN + x, bold);
        }
        self.y -= LINE_HEIGHT;
    }

    fn finish(self) -> Result<Vec<u8>, AppError> {
        self.doc.save_to_bytes().map_err(pdf_error)
    }
}

fn money(amount: f64) -> String {
    format!("Rs. {:.2}", amount)
}

/// Renders the invoice for a payment and its billing snapshot.
///
/// When the payment has no item snapshot the invoice shows a single line for the
/// full amount.
///
/// # Returns
/// - `Ok(Vec<u8>)` - PDF bytes
/// - `Err(AppError::InternalError)` - PDF serialization failed
pub fn render_invoice(payment: &Payment, billing: &Billing) -> Result<Vec<u8>, AppError> {
    let mut pdf = PageWriter::new(&format!("Invoice #{}", payment.id))?;

    pdf.title("AgroSphere Invoice");
    pdf.field("Invoice no.", &format!("INV-{:06}", payment.id));
    pdf.field("Order", &payment.order_ref);
    pdf.field("Issued", &Utc::now().format("%Y-%m-%d").to_string());
    pdf.field("Payment method", payment.method.as_str());
    pdf.field("Status", payment.status.as_str());

    pdf.heading("Billed to");
    pdf.line(&billing.full_name);
    pdf.line(&billing.address);
    pdf.line(&format!("{} {}", billing.city, billing.postal_code));
    pdf.line(&billing.email);
    pdf.line(&billing.phone);

    pdf.heading("Items");
    pdf.row(
        &[
            ("Item", 0.0),
            ("Qty", 95.0),
            ("Unit price", 115.0),
            ("Total", 145.0),
        ],
        true,
    );
    if payment.items.is_empty() {
        let label = format!("Order {}", payment.order_ref);
        let amount = money(payment.amount);
        pdf.row(
            &[
                (label.as_str(), 0.0),
                ("1", 95.0),
                (amount.as_str(), 115.0),
                (amount.as_str(), 145.0),
            ],
            false,
        );
    } else {
        for item in &payment.items {
            let quantity = item.quantity.to_string();
            let unit_price = money(item.unit_price);
            let total = money(item.line_total());
            pdf.row(
                &[
                    (item.product_name.as_str(), 0.0),
                    (quantity.as_str(), 95.0),
                    (unit_price.as_str(), 115.0),
                    (total.as_str(), 145.0),
                ],
                false,
            );
        }
    }

    pdf.y -= LINE_HEIGHT / 2.0;
    let paid = money(payment.amount);
    pdf.row(&[("Amount paid", 115.0), (paid.as_str(), 145.0)], true);

    pdf.finish()
}

/// Renders a profile report listing the user's details and registered lands.
pub fn render_user_report(user: &User, lands: &[Land]) -> Result<Vec<u8>, AppError> {
    let mut pdf = PageWriter::new(&format!("User report {}", user.username))?;

    pdf.title("AgroSphere Profile Report");
    pdf.field("Generated", &Utc::now().format("%Y-%m-%d %H:%M UTC").to_string());

    pdf.heading("Profile");
    pdf.field("Full name", &user.full_name);
    pdf.field("Username", &user.username);
    pdf.field("Email", &user.email);
    pdf.field("Role", user.role.as_str());
    pdf.field("Phone", user.phone.as_deref().unwrap_or("-"));
    pdf.field("Address", user.address.as_deref().unwrap_or("-"));
    pdf.field("Member since", &user.created_at.format("%Y-%m-%d").to_string());

    pdf.heading(&format!("Registered lands ({})", lands.len()));
    if lands.is_empty() {
        pdf.line("No lands registered.");
    } else {
        pdf.row(
            &[
                ("Land ID", 0.0),
                ("Name", 35.0),
                ("District", 90.0),
                ("Acres", 130.0),
                ("Soil", 150.0),
            ],
            true,
        );
        for land in lands {
            let acres = format!("{:.2}", land.size_acres);
            pdf.row(
                &[
                    (land.land_id.as_str(), 0.0),
                    (land.name.as_str(), 35.0),
                    (land.district.as_str(), 90.0),
                    (acres.as_str(), 130.0),
                    (land.soil_type.as_deref().unwrap_or("-"), 150.0),
                ],
                false,
            );
        }
        let total: f64 = lands.iter().map(|l| l.size_acres).sum();
        pdf.y -= LINE_HEIGHT / 2.0;
        pdf.field("Total acreage", &format!("{:.2}", total));
    }

    pdf.finish()
}
