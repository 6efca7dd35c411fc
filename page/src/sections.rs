//! Typed section views.
//!
//! A [`SectionCopy`] carries an open-ended content payload. Before rendering,
//! it is projected into a [`SectionView`]: one variant per known section id,
//! each holding exactly the keys its template reads. Optional keys stay
//! `Option` so the "absent field, omitted element" rule holds per field.
//!
//! Ids that are not a [`SectionKind`] have no template and project to `None`.

use std::fmt;
use std::str::FromStr;

use crate::types::{Archetype, Faq, Review, SectionContent, SectionCopy, Step, TeamMember};

/// The eleven known page slots, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    AboveTheFold,
    Lead,
    Proof,
    Benefits,
    Differentiators,
    HowItWorks,
    Offer,
    AboutTeam,
    SocialProofIntent,
    Faqs,
    FullStop,
}

impl SectionKind {
    /// Display order of the page
    pub const ALL: [SectionKind; 11] = [
        SectionKind::AboveTheFold,
        SectionKind::Lead,
        SectionKind::Proof,
        SectionKind::Benefits,
        SectionKind::Differentiators,
        SectionKind::HowItWorks,
        SectionKind::Offer,
        SectionKind::AboutTeam,
        SectionKind::SocialProofIntent,
        SectionKind::Faqs,
        SectionKind::FullStop,
    ];

    /// Section id this slot is looked up by
    pub fn id(self) -> &'static str {
        match self {
            SectionKind::AboveTheFold => "above_the_fold",
            SectionKind::Lead => "lead_section",
            SectionKind::Proof => "proof_section",
            SectionKind::Benefits => "benefits_section",
            SectionKind::Differentiators => "differentiators",
            SectionKind::HowItWorks => "how_it_works",
            SectionKind::Offer => "offer_section",
            SectionKind::AboutTeam => "about_team",
            SectionKind::SocialProofIntent => "social_proof_intent",
            SectionKind::Faqs => "faqs",
            SectionKind::FullStop => "full_stop",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| format!("no template for section id '{}'", s))
    }
}

/// Payment rail a checkout control points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutRail {
    MercadoPago,
    PayPal,
}

impl CheckoutRail {
    /// Audience caption shown under the button text
    pub fn label(self) -> &'static str {
        match self {
            CheckoutRail::MercadoPago => "Argentina (Mercado Pago)",
            CheckoutRail::PayPal => "Resto del Mundo (PayPal)",
        }
    }

    /// CSS modifier for the button
    pub fn class(self) -> &'static str {
        match self {
            CheckoutRail::MercadoPago => "checkout-btn checkout-mercado-pago",
            CheckoutRail::PayPal => "checkout-btn checkout-paypal",
        }
    }
}

/// Call-to-action destinations of a section.
///
/// The two rails are independent: either, both or neither may be set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Checkout {
    Both { mercado_pago: String, paypal: String },
    MercadoPago(String),
    PayPal(String),
    /// No destination; a plain button is rendered
    Generic,
}

impl Checkout {
    pub fn from_links(mercado_pago: Option<&str>, paypal: Option<&str>) -> Self {
        match (mercado_pago, paypal) {
            (Some(mp), Some(pp)) => Checkout::Both {
                mercado_pago: mp.to_string(),
                paypal: pp.to_string(),
            },
            (Some(mp), None) => Checkout::MercadoPago(mp.to_string()),
            (None, Some(pp)) => Checkout::PayPal(pp.to_string()),
            (None, None) => Checkout::Generic,
        }
    }

    /// Linked controls in render order (Mercado Pago first). Empty for
    /// [`Checkout::Generic`].
    pub fn links(&self) -> Vec<(CheckoutRail, String)> {
        match self {
            Checkout::Both {
                mercado_pago,
                paypal,
            } => vec![
                (CheckoutRail::MercadoPago, mercado_pago.clone()),
                (CheckoutRail::PayPal, paypal.clone()),
            ],
            Checkout::MercadoPago(url) => vec![(CheckoutRail::MercadoPago, url.clone())],
            Checkout::PayPal(url) => vec![(CheckoutRail::PayPal, url.clone())],
            Checkout::Generic => Vec::new(),
        }
    }

    fn of(content: &SectionContent) -> Self {
        Checkout::from_links(
            content.mercado_pago_url.as_deref(),
            content.paypal_url.as_deref(),
        )
    }
}

/// Button text plus destinations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: Option<String>,
    pub checkout: Checkout,
}

impl CallToAction {
    fn of(content: &SectionContent) -> Self {
        Self {
            label: content.cta.clone(),
            checkout: Checkout::of(content),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroCopy {
    pub eyebrow: Option<String>,
    pub headline: String,
    pub subheadline: Option<String>,
    pub video_url: Option<String>,
    pub bullets: Option<Vec<String>>,
    pub friction_remover: Option<String>,
    pub action: CallToAction,
    pub social_proof: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadCopy {
    pub headline: String,
    pub pain_point: Option<String>,
    pub solution_teaser: Option<String>,
    pub usp: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofCopy {
    pub headline: String,
    pub social_proof: Option<String>,
    pub reviews: Option<Vec<Review>>,
}

/// Headline plus bullets; used by the benefits slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulletsCopy {
    pub headline: String,
    pub bullets: Option<Vec<String>>,
}

/// Who teaches the offer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub title: Option<String>,
    pub quote: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifferentiatorsCopy {
    pub headline: String,
    pub image_url: Option<String>,
    pub author: Option<Author>,
    pub bullets: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepsCopy {
    pub headline: String,
    pub steps: Option<Vec<Step>>,
}

/// Closing copy with checkout; used by the offer and full-stop slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfferCopy {
    pub headline: String,
    pub bullets: Option<Vec<String>>,
    pub friction_remover: Option<String>,
    pub action: CallToAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamCopy {
    pub headline: String,
    pub team: Option<Vec<TeamMember>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchetypesCopy {
    pub headline: String,
    pub archetypes: Option<Vec<Archetype>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqsCopy {
    pub headline: String,
    pub faqs: Option<Vec<Faq>>,
}

/// A section narrowed to what its template reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionView {
    AboveTheFold(HeroCopy),
    Lead(LeadCopy),
    Proof(ProofCopy),
    Benefits(BulletsCopy),
    Differentiators(DifferentiatorsCopy),
    HowItWorks(StepsCopy),
    Offer(OfferCopy),
    AboutTeam(TeamCopy),
    SocialProofIntent(ArchetypesCopy),
    Faqs(FaqsCopy),
    FullStop(OfferCopy),
}

impl SectionView {
    /// Project a section into its template's view, or `None` when no
    /// template claims the id.
    pub fn from_copy(section: &SectionCopy) -> Option<Self> {
        let kind = section.id.parse::<SectionKind>().ok()?;
        Some(Self::project(kind, &section.content))
    }

    /// Project content for a known slot.
    pub fn project(kind: SectionKind, c: &SectionContent) -> Self {
        let headline = c.headline.clone();
        match kind {
            SectionKind::AboveTheFold => SectionView::AboveTheFold(HeroCopy {
                eyebrow: c.eyebrow.clone(),
                headline,
                subheadline: c.subheadline.clone(),
                video_url: c.video_url.clone(),
                bullets: c.bullets.clone(),
                friction_remover: c.friction_remover.clone(),
                action: CallToAction::of(c),
                social_proof: c.social_proof.clone(),
            }),
            SectionKind::Lead => SectionView::Lead(LeadCopy {
                headline,
                pain_point: c.pain_point.clone(),
                solution_teaser: c.solution_teaser.clone(),
                usp: c.usp.clone(),
            }),
            SectionKind::Proof => SectionView::Proof(ProofCopy {
                headline,
                social_proof: c.social_proof.clone(),
                reviews: c.reviews.clone(),
            }),
            SectionKind::Benefits => SectionView::Benefits(BulletsCopy {
                headline,
                bullets: c.bullets.clone(),
            }),
            SectionKind::Differentiators => SectionView::Differentiators(DifferentiatorsCopy {
                headline,
                image_url: c.image_url.clone(),
                author: c.author_name.clone().map(|name| Author {
                    name,
                    title: c.author_title.clone(),
                    quote: c.author_quote.clone(),
                }),
                bullets: c.bullets.clone(),
            }),
            SectionKind::HowItWorks => SectionView::HowItWorks(StepsCopy {
                headline,
                steps: c.steps.clone(),
            }),
            SectionKind::Offer => SectionView::Offer(OfferCopy::of(headline, c)),
            SectionKind::AboutTeam => SectionView::AboutTeam(TeamCopy {
                headline,
                team: c.team.clone(),
            }),
            SectionKind::SocialProofIntent => SectionView::SocialProofIntent(ArchetypesCopy {
                headline,
                archetypes: c.archetypes.clone(),
            }),
            SectionKind::Faqs => SectionView::Faqs(FaqsCopy {
                headline,
                faqs: c.faqs.clone(),
            }),
            SectionKind::FullStop => SectionView::FullStop(OfferCopy::of(headline, c)),
        }
    }
}

impl OfferCopy {
    fn of(headline: String, c: &SectionContent) -> Self {
        Self {
            headline,
            bullets: c.bullets.clone(),
            friction_remover: c.friction_remover.clone(),
            action: CallToAction::of(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ids_round_trip_and_unknown_ids_fail() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.id().parse::<SectionKind>(), Ok(kind));
        }
        assert!("pricing".parse::<SectionKind>().is_err());
        assert!("FAQS".parse::<SectionKind>().is_err());
    }

    #[test]
    fn checkout_covers_every_rail_combination() {
        assert_eq!(Checkout::from_links(None, None), Checkout::Generic);
        assert!(Checkout::Generic.links().is_empty());

        let mp = Checkout::from_links(Some("https://mp"), None);
        assert_eq!(mp.links(), vec![(CheckoutRail::MercadoPago, "https://mp".to_string())]);

        let pp = Checkout::from_links(None, Some("https://pp"));
        assert_eq!(pp.links(), vec![(CheckoutRail::PayPal, "https://pp".to_string())]);

        let both = Checkout::from_links(Some("https://mp"), Some("https://pp"));
        let rails: Vec<_> = both.links().into_iter().map(|(rail, _)| rail).collect();
        assert_eq!(rails, vec![CheckoutRail::MercadoPago, CheckoutRail::PayPal]);
    }

    #[test]
    fn unknown_id_has_no_view() {
        let section = SectionCopy {
            id: "pricing".into(),
            content: SectionContent {
                headline: "H".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(SectionView::from_copy(&section).is_none());
    }

    #[test]
    fn author_requires_name() {
        let content = SectionContent {
            headline: "H".into(),
            author_title: Some("Title only".into()),
            ..Default::default()
        };
        match SectionView::project(SectionKind::Differentiators, &content) {
            SectionView::Differentiators(view) => assert!(view.author.is_none()),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn full_stop_reads_checkout_links() {
        let content = SectionContent {
            headline: "H".into(),
            cta: Some("Go".into()),
            paypal_url: Some("https://pp".into()),
            ..Default::default()
        };
        match SectionView::project(SectionKind::FullStop, &content) {
            SectionView::FullStop(view) => {
                assert_eq!(view.action.label.as_deref(), Some("Go"));
                assert_eq!(view.action.checkout, Checkout::PayPal("https://pp".into()));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }
}
