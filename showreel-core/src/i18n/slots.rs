//! Where each translated string lands on the page.

use crate::dom::Target;

/// A single text slot fed by one catalog path.
#[derive(Debug, Clone, Copy)]
pub struct FieldSlot {
    pub target: Target<'static>,
    pub key: &'static str,
}

/// Repeated cards filled from a keyed catalog object.
///
/// A card carrying `key_attr` (e.g. `data-service="drone"`) is filled from that
/// key; otherwise the `n`th card takes the `n`th key in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct CardSet {
    pub selector: &'static str,
    pub key_attr: &'static str,
    pub items: &'static str,
    /// `(child selector, field name)` pairs written into each card.
    pub fields: &'static [(&'static str, &'static str)],
}

/// Repeated elements filled positionally from a catalog array.
#[derive(Debug, Clone, Copy)]
pub struct ListSlot {
    pub selector: &'static str,
    pub items: &'static str,
    pub fields: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy)]
pub struct SlotTable {
    pub fields: &'static [FieldSlot],
    pub cards: &'static [CardSet],
    pub lists: &'static [ListSlot],
}

const fn field(target: Target<'static>, key: &'static str) -> FieldSlot {
    FieldSlot { target, key }
}

const FIELDS: &[FieldSlot] = &[
    field(Target::nth(".nav-link", 0), "nav.home"),
    field(Target::nth(".nav-link", 1), "nav.about"),
    field(Target::nth(".nav-link", 2), "nav.work"),
    field(Target::nth(".nav-link", 3), "nav.services"),
    field(Target::nth(".nav-link", 4), "nav.contact"),
    field(Target::first(".hero-title-line"), "hero.title"),
    field(Target::first(".hero-subtitle"), "hero.subtitle"),
    field(Target::first(".scroll-indicator span"), "hero.scroll"),
    field(Target::first("#about .section-title"), "about.title"),
    field(Target::first(".about-text"), "about.text"),
    field(Target::first("#work .section-title"), "work.title"),
    field(Target::first("#work .portfolio-subtitle"), "work.subtitle"),
    field(Target::first(".view-more .btn"), "work.viewMore"),
    field(Target::first("#services .section-title"), "services.title"),
    field(Target::first(".services-subtitle"), "services.subtitle"),
    field(Target::first("#testimonials .section-title"), "testimonials.title"),
    field(Target::first("#contact .section-title"), "contact.title"),
    field(
        Target::nth(".contact-info .elementor-icon-list-text", 0),
        "contact.phone",
    ),
    field(
        Target::nth(".contact-info .elementor-icon-list-text", 1),
        "contact.email",
    ),
    field(Target::nth(".contact-links .btn-outline", 0), "contact.bioLink"),
    field(
        Target::nth(".contact-links .btn-outline", 1),
        "contact.businessCard",
    ),
    field(Target::first(".portfolio-reels .section-title"), "portfolio.title"),
    field(
        Target::first(".portfolio-reels .portfolio-subtitle"),
        "portfolio.subtitle",
    ),
];

const CARDS: &[CardSet] = &[
    CardSet {
        selector: ".service-item",
        key_attr: "data-service",
        items: "services.items",
        fields: &[("h3", "title"), ("p", "desc")],
    },
    CardSet {
        selector: ".testimonial-item",
        key_attr: "data-testimonial",
        items: "testimonials.items",
        fields: &[("p", "text"), (".client-name", "name")],
    },
];

const LISTS: &[ListSlot] = &[ListSlot {
    selector: ".portfolio-item",
    items: "portfolio.items",
    fields: &[("h3", "title"), (".portfolio-category", "category")],
}];

/// Text slots of the portfolio page.
pub const SLOT_TABLE: SlotTable = SlotTable {
    fields: FIELDS,
    cards: CARDS,
    lists: LISTS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Lang};

    #[test]
    fn every_field_key_resolves_in_english() {
        let catalog = Catalog::embedded().unwrap();
        for slot in SLOT_TABLE.fields {
            assert!(
                catalog.text(Lang::En, slot.key).is_some(),
                "no string for {}",
                slot.key
            );
        }
        for set in SLOT_TABLE.cards {
            let keys = catalog.keys(Lang::En, set.items);
            assert!(!keys.is_empty(), "no cards under {}", set.items);
            for key in keys {
                for (_, name) in set.fields {
                    let path = format!("{}.{key}.{name}", set.items);
                    assert!(catalog.text(Lang::En, &path).is_some(), "no string for {path}");
                }
            }
        }
    }

    #[test]
    fn navigation_links_cover_positions_zero_to_four() {
        let positions: Vec<usize> = SLOT_TABLE
            .fields
            .iter()
            .filter(|slot| slot.target.selector == ".nav-link")
            .map(|slot| slot.target.index)
            .collect();
        assert_eq!(positions, [0, 1, 2, 3, 4]);
    }
}
