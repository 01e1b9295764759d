//! Seed content for a fresh draft: bilingual copy for the landing page and
//! the default section order.

use super::blocks::{BlockConfig, BlockKind};
use super::content::{
    Bundle, ContactInfo, Cta, FaqItem, Feature, Hero, PaymentMethod, Service, SiteInfo, Stat,
    Testimonial,
};
use super::{AnimConfig, CmsState, Design, LocaleContent};
use crate::models::Locale;

pub fn default_blocks() -> Vec<BlockConfig> {
    BlockKind::ALL.into_iter().map(BlockConfig::of).collect()
}

pub fn default_design() -> Design {
    Design {
        palette: None,
        anim: AnimConfig::default(),
    }
}

fn default_en_bundle() -> Bundle {
    Bundle {
        site: SiteInfo {
            name: "KYC Trust".to_string(),
            tagline: "Trusted financial accounts, fast".to_string(),
            phone: "+201062453344".to_string(),
            logo_src: super::content::default_logo_src(),
        },
        hero: Hero {
            title: "Your gateway to global payment accounts".to_string(),
            subtitle: "Verified accounts, delivered within hours".to_string(),
            description: "We open and verify accounts on the leading payment platforms \
                          so you can send, receive and get paid worldwide."
                .to_string(),
            cta: "Order now".to_string(),
            secondary: "Browse services".to_string(),
            stats: vec![
                Stat {
                    label: "Happy clients".to_string(),
                    value: "+1200".to_string(),
                },
                Stat {
                    label: "Services".to_string(),
                    value: "15".to_string(),
                },
                Stat {
                    label: "Avg. delivery".to_string(),
                    value: "4h".to_string(),
                },
            ],
        },
        services: vec![
            Service {
                name: "Payoneer".to_string(),
                description: "Verified Payoneer account with card eligibility".to_string(),
                price: "$30".to_string(),
                category: "accounts".to_string(),
                popular: true,
                ..Default::default()
            },
            Service {
                name: "Wise".to_string(),
                description: "Personal Wise account, fully verified".to_string(),
                price: "$30".to_string(),
                category: "accounts".to_string(),
                ..Default::default()
            },
            Service {
                name: "PayPal".to_string(),
                description: "Ready-to-use PayPal account".to_string(),
                price: "$15".to_string(),
                category: "accounts".to_string(),
                ..Default::default()
            },
        ],
        payments: vec![
            PaymentMethod {
                name: "Vodafone Cash".to_string(),
                number: "01062453344".to_string(),
                color: "#e60000".to_string(),
                note: None,
            },
            PaymentMethod {
                name: "USDT (TRC20)".to_string(),
                number: "TXexampleWalletAddress".to_string(),
                color: "#26a17b".to_string(),
                note: Some("Network: TRON".to_string()),
            },
        ],
        features: vec![
            Feature {
                title: "Fast delivery".to_string(),
                desc: "Most orders are completed within hours".to_string(),
                icon: "zap".to_string(),
            },
            Feature {
                title: "After-sales support".to_string(),
                desc: "We stay with you after the account is delivered".to_string(),
                icon: "headset".to_string(),
            },
        ],
        faq: vec![FaqItem {
            question: "How long does delivery take?".to_string(),
            answer: "Usually between one and twenty-four hours depending on the service."
                .to_string(),
        }],
        testimonials: vec![Testimonial {
            name: "Ahmed".to_string(),
            role: "Freelancer".to_string(),
            quote: "Account was delivered the same day, works perfectly.".to_string(),
            avatar: None,
        }],
        logos: vec![],
        cta: Cta {
            title: "Ready to get started?".to_string(),
            subtitle: "Order your account today".to_string(),
            primary_text: "Order on WhatsApp".to_string(),
            secondary_text: "See all services".to_string(),
        },
        contact: ContactInfo {
            title: "Contact us".to_string(),
            subtitle: "We reply within minutes during working hours".to_string(),
            whatsapp: "+201062453344".to_string(),
            features: vec![
                "Instant replies".to_string(),
                "Secure payment".to_string(),
            ],
        },
    }
}

fn default_ar_bundle() -> Bundle {
    Bundle {
        site: SiteInfo {
            name: "كي واي سي ترست".to_string(),
            tagline: "حسابات مالية موثوقة وبسرعة".to_string(),
            phone: "+201062453344".to_string(),
            logo_src: super::content::default_logo_src(),
        },
        hero: Hero {
            title: "بوابتك لحسابات الدفع العالمية".to_string(),
            subtitle: "حسابات موثّقة تصلك خلال ساعات".to_string(),
            description: "نفتح ونوثّق حسابات على أشهر منصات الدفع لتتمكن من الإرسال \
                          والاستقبال وتلقي أرباحك من أي مكان."
                .to_string(),
            cta: "اطلب الآن".to_string(),
            secondary: "تصفح الخدمات".to_string(),
            stats: vec![
                Stat {
                    label: "عميل سعيد".to_string(),
                    value: "+1200".to_string(),
                },
                Stat {
                    label: "خدمة".to_string(),
                    value: "15".to_string(),
                },
                Stat {
                    label: "متوسط التسليم".to_string(),
                    value: "4 ساعات".to_string(),
                },
            ],
        },
        services: vec![
            Service {
                name: "بايونير".to_string(),
                description: "حساب بايونير موثّق مع إمكانية إصدار بطاقة".to_string(),
                price: "30$".to_string(),
                category: "accounts".to_string(),
                popular: true,
                ..Default::default()
            },
            Service {
                name: "وايز".to_string(),
                description: "حساب وايز شخصي موثّق بالكامل".to_string(),
                price: "30$".to_string(),
                category: "accounts".to_string(),
                ..Default::default()
            },
            Service {
                name: "باي بال".to_string(),
                description: "حساب باي بال جاهز للاستخدام".to_string(),
                price: "15$".to_string(),
                category: "accounts".to_string(),
                ..Default::default()
            },
        ],
        payments: vec![
            PaymentMethod {
                name: "فودافون كاش".to_string(),
                number: "01062453344".to_string(),
                color: "#e60000".to_string(),
                note: None,
            },
            PaymentMethod {
                name: "USDT (TRC20)".to_string(),
                number: "TXexampleWalletAddress".to_string(),
                color: "#26a17b".to_string(),
                note: Some("الشبكة: TRON".to_string()),
            },
        ],
        features: vec![
            Feature {
                title: "تسليم سريع".to_string(),
                desc: "معظم الطلبات تكتمل خلال ساعات".to_string(),
                icon: "zap".to_string(),
            },
            Feature {
                title: "دعم بعد البيع".to_string(),
                desc: "نبقى معك بعد استلام الحساب".to_string(),
                icon: "headset".to_string(),
            },
        ],
        faq: vec![FaqItem {
            question: "كم يستغرق التسليم؟".to_string(),
            answer: "عادة من ساعة إلى أربع وعشرين ساعة حسب الخدمة.".to_string(),
        }],
        testimonials: vec![Testimonial {
            name: "أحمد".to_string(),
            role: "مستقل".to_string(),
            quote: "استلمت الحساب في نفس اليوم ويعمل بشكل ممتاز.".to_string(),
            avatar: None,
        }],
        logos: vec![],
        cta: Cta {
            title: "جاهز للبدء؟".to_string(),
            subtitle: "اطلب حسابك اليوم".to_string(),
            primary_text: "اطلب عبر واتساب".to_string(),
            secondary_text: "كل الخدمات".to_string(),
        },
        contact: ContactInfo {
            title: "تواصل معنا".to_string(),
            subtitle: "نرد خلال دقائق في ساعات العمل".to_string(),
            whatsapp: "+201062453344".to_string(),
            features: vec!["ردود فورية".to_string(), "دفع آمن".to_string()],
        },
    }
}

pub fn default_state() -> CmsState {
    CmsState {
        version: super::CMS_STATE_VERSION,
        locale: Locale::Ar,
        design: default_design(),
        blocks: default_blocks(),
        content: LocaleContent {
            ar: default_ar_bundle(),
            en: default_en_bundle(),
        },
    }
}
