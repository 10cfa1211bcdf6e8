//! Bilingual page metadata.
//!
//! The informational pages are rendered client-side; this table is the
//! server's source for their localized titles and descriptions.

use sudood_core::Localized;

pub struct PageMeta {
    pub title: Localized,
    pub description: Localized,
}

/// Metadata for a page slug; `""` is the home page. `None` for unknown slugs.
pub fn page_meta(slug: &str) -> Option<PageMeta> {
    let (title_en, title_ar, desc_en, desc_ar) = match slug {
        "" => (
            "SUDOOD - Premium Water & Gas Valves | Saudi Manufacturer",
            "سدود - صمامات مياه وغاز فاخرة | مصنع سعودي",
            "SUDOOD is a leading Saudi brand specializing in high-quality brass water and gas valves. SASO, UL, and ISO certified solutions for industrial and residential projects.",
            "سدود علامة سعودية رائدة متخصصة في صمامات المياه والغاز النحاسية عالية الجودة، بحلول معتمدة من SASO وUL وISO للمشاريع الصناعية والسكنية.",
        ),
        "about" => (
            "About SUDOOD",
            "عن سدود",
            "A Saudi company supplying and manufacturing high-purity brass valves engineered for long life, certified to SASO, UL, CSA, FM and ISO9001.",
            "شركة سعودية متخصصة في توريد وتصنيع صمامات نحاسية عالية النقاء مصممة لعمر طويل، معتمدة من SASO وUL وCSA وFM وISO9001.",
        ),
        "services" => (
            "Our Services",
            "خدماتنا",
            "Custom manufacturing and assembly, supply to contractors and retailers, technical support, and quality testing and certification compliance.",
            "تصنيع وتجميع حسب الطلب، توريد للمقاولين وتجار التجزئة، دعم فني، واختبارات جودة وامتثال للشهادات.",
        ),
        "contact" => (
            "Contact Us",
            "تواصل معنا",
            "Contact SUDOOD to request a quote or learn more about our water and gas valve solutions.",
            "تواصل مع سدود لطلب عرض سعر أو لمعرفة المزيد عن حلول صمامات المياه والغاز لدينا.",
        ),
        "ai-future" => (
            "AI Products",
            "منتجات الذكاء الاصطناعي",
            "Smart valves with remote control, leak detection and IoT connectivity.",
            "صمامات ذكية بتحكم عن بعد وكشف التسرب واتصال بإنترنت الأشياء.",
        ),
        "privacy" => (
            "Privacy Policy",
            "سياسة الخصوصية",
            "How SUDOOD collects and uses information submitted through this website.",
            "كيفية جمع سدود للمعلومات المقدمة عبر هذا الموقع واستخدامها.",
        ),
        _ => return None,
    };

    Some(PageMeta {
        title: Localized::new(title_en, title_ar),
        description: Localized::new(desc_en, desc_ar),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudood_core::Language;

    #[test]
    fn all_site_pages_have_metadata() {
        for slug in ["", "about", "services", "contact", "ai-future", "privacy"] {
            let meta = page_meta(slug).unwrap();
            assert!(!meta.title.get(Language::En).is_empty());
            assert!(!meta.title.get(Language::Ar).is_empty());
        }
        assert!(page_meta("checkout").is_none());
    }
}
