use crate::model::Faq;

pub fn faq_categories() -> Vec<String> {
    ["registration", "events", "accommodation", "payment"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn faq(id: &str, question: &str, answer: &str, category: &str) -> Faq {
    Faq {
        id: id.into(),
        question: question.into(),
        answer: answer.into(),
        category: category.into(),
    }
}

pub fn faqs() -> Vec<Faq> {
    vec![
        faq(
            "faq-register-how",
            "How do I register for events?",
            "Pick your events on the registration page, fill in your team details, and \
             complete the payment. A confirmation email follows within a few minutes.",
            "registration",
        ),
        faq(
            "faq-register-multiple",
            "Can I register for more than one event?",
            "Yes, as long as the event schedules do not clash. The schedule page marks \
             overlapping slots.",
            "registration",
        ),
        faq(
            "faq-register-deadline",
            "When does registration close?",
            "Online registration closes on March 10, 2026. On-spot registration is \
             available for select events, subject to slots.",
            "registration",
        ),
        faq(
            "faq-events-id",
            "Do I need a college ID at the venue?",
            "Yes. Every participant must carry a valid college ID card and the \
             registration confirmation.",
            "events",
        ),
        faq(
            "faq-events-reporting",
            "How early should I report for my event?",
            "Report at the venue at least 30 minutes before the scheduled start. Late \
             arrivals may be disqualified at the coordinator's discretion.",
            "events",
        ),
        faq(
            "faq-events-rules",
            "Where can I find the detailed rules for each event?",
            "Each event card lists its rules; coordinators will also brief all \
             participants before the event begins.",
            "events",
        ),
        faq(
            "faq-stay-hostel",
            "Is accommodation available for outstation participants?",
            "Hostel accommodation is available on campus for ₹300 per night, including \
             breakfast. Book it during registration.",
            "accommodation",
        ),
        faq(
            "faq-stay-food",
            "Are food stalls available on campus?",
            "Yes, food courts run through all three days near the main stage and the \
             sports block.",
            "accommodation",
        ),
        faq(
            "faq-pay-methods",
            "What payment methods are accepted?",
            "UPI, debit and credit cards, and net banking are accepted through the \
             payment page.",
            "payment",
        ),
        faq(
            "faq-pay-refund",
            "What is the cancellation policy?",
            "Cancellations made before March 1, 2026 receive a full refund to the \
             original payment method. No refund after that date.",
            "payment",
        ),
    ]
}
