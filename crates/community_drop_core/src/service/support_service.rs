//! Support page FAQ.

use serde::Serialize;

/// One question/answer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How does Community Drop work?",
        answer: "Community Drop connects you with local hubs where you can have packages delivered when you're not home. Simply choose a nearby hub during checkout, and pick up your package at your convenience.",
    },
    FaqEntry {
        question: "How do I find hubs near me?",
        answer: "Use our hub finder on the 'Find Hubs' page. You can search by address or use your current location to see all available hubs with their operating hours and capacity.",
    },
    FaqEntry {
        question: "Is my package secure at the hub?",
        answer: "Yes! All hubs are verified partners with secure storage areas. Packages are tracked with QR codes and require verification for pickup. We also provide full insurance coverage.",
    },
    FaqEntry {
        question: "How long can I leave my package at a hub?",
        answer: "Packages can typically be stored for up to 7 days. You'll receive notifications when your package arrives and reminders before the storage period expires.",
    },
    FaqEntry {
        question: "What if I can't find my QR code?",
        answer: "You can retrieve your QR code from the tracking page using your tracking number. If you still have issues, contact the hub directly or use our support chat.",
    },
    FaqEntry {
        question: "How do I become a hub partner?",
        answer: "Visit our 'Become a Hub' page to fill out an application. We'll review your location and setup, then provide training and equipment to get you started.",
    },
    FaqEntry {
        question: "What are the fees for using Community Drop?",
        answer: "Community Drop is completely free for customers! There are no additional fees beyond standard shipping costs from retailers.",
    },
    FaqEntry {
        question: "Can I track my package in real-time?",
        answer: "Yes! Use our tracking page or scan QR codes to get real-time updates on your package location and status.",
    },
];

/// FAQ entries in display order.
pub fn faq_entries() -> &'static [FaqEntry] {
    FAQ
}
