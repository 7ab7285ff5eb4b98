//! Company header and footer drawn on every page

use super::types::CompanyInfo;
use crate::render::{Color, Font, PageCanvas, PageGeometry};

/// Fixed caption under the company name
pub const CATALOG_CAPTION: &str = "Product Catalog";

const HEADER_OFFSET: f32 = 30.0;
const CAPTION_OFFSET: f32 = 43.0;
const FOOTER_Y: f32 = 30.0;
const CONTACT_Y: f32 = 18.0;

/// Draw the header and footer for one page
///
/// Without a company nothing is drawn.
pub fn decorate_page(canvas: &mut PageCanvas<'_>, geometry: &PageGeometry, company: Option<&CompanyInfo>) {
    let Some(company) = company else {
        return;
    };

    let left = geometry.frame_left();
    let right = geometry.frame_right();
    let center = geometry.width / 2.0;

    canvas.save_state();

    canvas.draw_string(
        left,
        geometry.height - HEADER_OFFSET,
        Font::Helvetica,
        8.0,
        Color::GREY,
        &company.website,
    );
    canvas.draw_right_string(
        right,
        geometry.height - HEADER_OFFSET,
        Font::HelveticaBold,
        12.0,
        Color::BLACK,
        &company.name.to_uppercase(),
    );
    canvas.draw_right_string(
        right,
        geometry.height - CAPTION_OFFSET,
        Font::Helvetica,
        8.0,
        Color::BLACK,
        CATALOG_CAPTION,
    );

    if let Some(identity) = footer_identity(company) {
        canvas.draw_centred_string(center, FOOTER_Y, Font::Helvetica, 8.0, Color::BLACK, &identity);
    }
    if let Some(contact) = contact_line(company) {
        canvas.draw_centred_string(center, CONTACT_Y, Font::Helvetica, 8.0, Color::BLACK, &contact);
    }

    canvas.restore_state();
}

/// First footer line: name and address, whichever are present
pub fn footer_identity(company: &CompanyInfo) -> Option<String> {
    join_present([company.name.clone(), company.address.clone()], ", ")
}

/// Second footer line: `Tel: …` and `Email: …`
pub fn contact_line(company: &CompanyInfo) -> Option<String> {
    let phone = (!company.phone.is_empty()).then(|| format!("Tel: {}", company.phone));
    let email = (!company.email.is_empty()).then(|| format!("Email: {}", company.email));
    join_present([phone.unwrap_or_default(), email.unwrap_or_default()], " \u{2022} ")
}

fn join_present<const N: usize>(parts: [String; N], separator: &str) -> Option<String> {
    let present: Vec<String> = parts.into_iter().filter(|part| !part.is_empty()).collect();
    (!present.is_empty()).then(|| present.join(separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::Object;

    /// (x, y, text) for every text object drawn on the canvas
    fn drawn_text(canvas: &PageCanvas<'_>) -> Vec<(f32, f32, String)> {
        let mut items = Vec::new();
        let mut position = (0.0, 0.0);
        for op in canvas.operations() {
            match op.operator.as_str() {
                "Td" => {
                    position = (
                        op.operands[0].as_float().unwrap(),
                        op.operands[1].as_float().unwrap(),
                    )
                }
                "Tj" => {
                    if let Object::String(bytes, _) = &op.operands[0] {
                        let text = bytes.iter().map(|&b| b as char).collect();
                        items.push((position.0, position.1, text));
                    }
                }
                _ => {}
            }
        }
        items
    }

    fn texts(canvas: &PageCanvas<'_>) -> Vec<String> {
        drawn_text(canvas).into_iter().map(|(_, _, text)| text).collect()
    }

    fn company(name: &str) -> CompanyInfo {
        CompanyInfo {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_company_draws_nothing() {
        let mut canvas = PageCanvas::new();
        decorate_page(&mut canvas, &PageGeometry::catalog_a4(), None);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_website_only_company() {
        let geometry = PageGeometry::catalog_a4();
        let company = CompanyInfo {
            website: "https://x.com".into(),
            ..company("Acme")
        };
        let mut canvas = PageCanvas::new();
        decorate_page(&mut canvas, &geometry, Some(&company));

        let items = drawn_text(&canvas);
        assert_eq!(
            texts(&canvas),
            vec!["https://x.com", "ACME", CATALOG_CAPTION, "Acme"]
        );

        // website on the left, name right-aligned to the frame edge
        let (website_x, website_y, _) = &items[0];
        assert_eq!(*website_x, geometry.frame_left());
        assert_eq!(*website_y, geometry.height - 30.0);

        let (name_x, _, name) = &items[1];
        let name_width = Font::HelveticaBold.text_width(name, 12.0);
        assert!((name_x + name_width - geometry.frame_right()).abs() < 1e-3);

        // footer holds only the name, no contact line
        let (_, footer_y, _) = &items[3];
        assert_eq!(*footer_y, 30.0);
    }

    #[test]
    fn test_full_company_footer() {
        let company = CompanyInfo {
            name: "Mountain Tea Co".into(),
            website: "https://mountaintea.com".into(),
            address: "456 Tea Garden Road".into(),
            phone: "+91-9876543210".into(),
            email: "sales@mountaintea.com".into(),
        };
        let mut canvas = PageCanvas::new();
        decorate_page(&mut canvas, &PageGeometry::catalog_a4(), Some(&company));

        let texts = texts(&canvas);
        assert_eq!(texts[3], "Mountain Tea Co, 456 Tea Garden Road");
        assert_eq!(texts[4], "Tel: +91-9876543210 \u{95} Email: sales@mountaintea.com");
    }

    #[test]
    fn test_contact_line_segments() {
        let mut info = company("Acme");
        assert_eq!(contact_line(&info), None);

        info.email = "info@acme.test".into();
        assert_eq!(contact_line(&info).as_deref(), Some("Email: info@acme.test"));

        info.phone = "+1-555-0123".into();
        assert_eq!(
            contact_line(&info).as_deref(),
            Some("Tel: +1-555-0123 \u{2022} Email: info@acme.test")
        );
    }

    #[test]
    fn test_footer_identity_omits_missing_parts() {
        assert_eq!(footer_identity(&company("Acme")).as_deref(), Some("Acme"));
        assert_eq!(footer_identity(&company("")), None);

        let with_address = CompanyInfo {
            address: "1 Main St".into(),
            ..company("Acme")
        };
        assert_eq!(footer_identity(&with_address).as_deref(), Some("Acme, 1 Main St"));
    }
}
