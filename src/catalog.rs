//! Static site content: service categories, FAQ, and company contact facts.
//!
//! Everything here is compiled in and lives for the whole program.

/// Company name as shown in the header and footer
pub const COMPANY_NAME: &str = "Happy Visit Home Health";
/// Tagline used in the hero and footer
pub const TAGLINE: &str = "Compassionate Care in the Comfort of Your Home";
/// Public phone number
pub const PHONE: &str = "(310) 420-4449";
/// Address every contact-form submission is delivered to
pub const CONTACT_EMAIL: &str = "happyvisithomehealth@gmail.com";
/// Hero-section subtitle
pub const HERO_SUBTITLE: &str = "Professional home health care services tailored to your needs. We bring quality healthcare to your doorstep.";
/// Lead line under the services heading
pub const SERVICES_SUBTITLE: &str =
    "We provide comprehensive home health care services to meet your needs";
/// Lead line under the contact heading
pub const CONTACT_SUBTITLE: &str =
    "Ready to learn more? Contact us today to discuss your home health care needs.";
/// Office hours, one line per day range
pub const OFFICE_HOURS: &[&str] = &[
    "Monday - Friday: 8:00 AM - 6:00 PM",
    "Saturday: 9:00 AM - 2:00 PM",
];

/// A single service offered within a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceItem {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

/// A group of related services shown as one card on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub services: &'static [ServiceItem],
}

/// A frequently asked question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// All service categories in display order
pub const SERVICE_CATEGORIES: &[ServiceCategory] = &[
    ServiceCategory {
        id: "skilled-nursing",
        title: "Skilled Nursing",
        icon: "🏥",
        short_description: "Professional nursing care and specialized medical services",
        full_description: "Our skilled registered nurses provide comprehensive medical care including wound care, IV medication administration, disease management, and diabetic care in the comfort of your home.",
        services: &[
            ServiceItem {
                title: "Skilled Nursing",
                description: "Professional nursing care by licensed registered nurses providing comprehensive health assessments, post-surgical care, and complex medical condition management.",
                details: &[
                    "Licensed registered nurses (RNs)",
                    "Comprehensive health assessments",
                    "Post-surgical care and monitoring",
                    "Complex medical condition management",
                    "24/7 on-call nursing support",
                ],
            },
            ServiceItem {
                title: "Wound Care",
                description: "Expert wound care management for acute and chronic wounds using advanced techniques to promote healing and prevent infection.",
                details: &[
                    "Surgical wound care",
                    "Pressure ulcer treatment",
                    "Diabetic wound management",
                    "Dressing changes and wound monitoring",
                    "Infection prevention",
                ],
            },
            ServiceItem {
                title: "IV Medication Administration",
                description: "Safe intravenous medication delivery at home with skilled nurses ensuring sterile administration.",
                details: &[
                    "IV medication administration",
                    "Central line care",
                    "PICC line management",
                    "Infusion therapy",
                    "Medication monitoring and adjustment",
                ],
            },
            ServiceItem {
                title: "Diabetic Management",
                description: "Comprehensive diabetes care including blood glucose monitoring, insulin management, and education.",
                details: &[
                    "Blood glucose monitoring",
                    "Insulin administration and management",
                    "Diabetic foot care",
                    "Nutrition counseling",
                    "Diabetes education and self-care training",
                ],
            },
            ServiceItem {
                title: "Disease Management",
                description: "Personalized programs to help manage chronic conditions effectively while maintaining quality of life.",
                details: &[
                    "Chronic disease monitoring",
                    "Symptom management",
                    "Health status tracking",
                    "Medication coordination",
                    "Lifestyle guidance and support",
                ],
            },
        ],
    },
    ServiceCategory {
        id: "therapy-services",
        title: "Therapy Services",
        icon: "🏃",
        short_description: "Physical, speech, occupational therapy and fall prevention",
        full_description: "Licensed therapists provide personalized rehabilitation programs to help you regain strength, improve mobility, communication, and prevent falls in the comfort of your home.",
        services: &[
            ServiceItem {
                title: "Physical Therapy",
                description: "Personalized rehabilitation programs to regain strength, improve mobility, and recover from injuries or surgeries.",
                details: &[
                    "Mobility and strength training",
                    "Pain management",
                    "Balance and coordination exercises",
                    "Post-surgical rehabilitation",
                    "Assistive device training",
                ],
            },
            ServiceItem {
                title: "Speech Therapy",
                description: "Restore communication skills, improve swallowing function, and enhance cognitive-linguistic abilities.",
                details: &[
                    "Speech and language therapy",
                    "Swallowing therapy (dysphagia treatment)",
                    "Cognitive-linguistic therapy",
                    "Voice therapy",
                    "Communication device training",
                ],
            },
            ServiceItem {
                title: "Occupational Therapy",
                description: "Regain independence in daily living activities from dressing to cooking.",
                details: &[
                    "Activities of daily living (ADL) training",
                    "Fine motor skills development",
                    "Adaptive equipment training",
                    "Home modification recommendations",
                    "Cognitive rehabilitation",
                ],
            },
            ServiceItem {
                title: "Fall Prevention",
                description: "Comprehensive fall prevention including home safety assessments, mobility assistance, and education.",
                details: &[
                    "Home safety assessments",
                    "Mobility assistance",
                    "Balance and strength exercises",
                    "Safety equipment recommendations",
                    "Fall risk education",
                ],
            },
        ],
    },
    ServiceCategory {
        id: "personal-care",
        title: "Personal Care",
        icon: "🏠",
        short_description: "Daily living assistance and personal care support",
        full_description: "Compassionate personal care assistance to help you maintain independence and comfort at home.",
        services: &[ServiceItem {
            title: "Home Health Aid",
            description: "Assistance with bathing, grooming, light housekeeping, and daily living activities.",
            details: &[
                "Bathing and personal hygiene assistance",
                "Light housekeeping",
                "Meal preparation",
                "Laundry assistance",
                "Companionship and socialization",
            ],
        }],
    },
    ServiceCategory {
        id: "clinical-lab",
        title: "Clinical & Lab Services",
        icon: "🩸",
        short_description: "Medication management and in-home lab services",
        full_description: "Comprehensive medication management and convenient lab services in the comfort of your home.",
        services: &[
            ServiceItem {
                title: "Medication Management & Education",
                description: "Safe medication administration, monitoring, and education to ensure you understand and safely take your medications.",
                details: &[
                    "Medication administration",
                    "Medication reconciliation",
                    "Drug interaction monitoring",
                    "Medication education and counseling",
                    "Compliance support",
                ],
            },
            ServiceItem {
                title: "In-Home Blood Draws & Lab Services",
                description: "Professional phlebotomy services at home for all your lab needs. No need to travel - we come to you.",
                details: &[
                    "Blood draws for all lab tests",
                    "Specimen collection",
                    "Lab result coordination",
                    "Fasting blood work",
                    "Multiple lab panel testing",
                ],
            },
        ],
    },
    ServiceCategory {
        id: "care-coordination",
        title: "Care Coordination",
        icon: "📋",
        short_description: "Healthcare coordination and social services support",
        full_description: "We serve as a vital link between you, your doctors, and community resources to ensure coordinated, comprehensive care.",
        services: &[
            ServiceItem {
                title: "Social Services",
                description: "Emotional support, resource connections, and assistance navigating healthcare systems and community resources.",
                details: &[
                    "Emotional and psychological support",
                    "Resource and benefit coordination",
                    "Family counseling and support",
                    "Advance directive assistance",
                    "Community resource referrals",
                ],
            },
            ServiceItem {
                title: "Doctor Communication & Coordination",
                description: "Clear communication between you and your doctors, ensuring coordinated care and timely updates.",
                details: &[
                    "Regular updates to your physicians",
                    "Care plan coordination",
                    "Test result communication",
                    "Medication change notifications",
                    "Symptom and status reporting",
                ],
            },
        ],
    },
    ServiceCategory {
        id: "other-services",
        title: "Other Services",
        icon: "➕",
        short_description: "Additional specialized services as needed",
        full_description: "We provide additional specialized services tailored to your unique healthcare needs.",
        services: &[],
    },
];

/// About-section highlights
pub const ABOUT_FEATURES: &[&str] = &[
    "Licensed & Certified Professionals",
    "Personalized Care Plans",
    "24/7 Support Available",
    "Insurance Accepted",
];

/// About-section body paragraphs
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "At Happy Visit Home Health, we understand that receiving care in the comfort of your own home makes a significant difference in your healing journey. Our team of experienced healthcare professionals is dedicated to providing compassionate, personalized care that meets your unique needs.",
    "We believe in building meaningful relationships with our patients and their families, ensuring that every visit is not just about medical care, but about making you feel valued, respected, and truly cared for.",
];

/// Frequently asked questions in display order
pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What areas do you serve?",
        answer: "We provide home health services throughout our local community. Call us to confirm that your address is within our service area.",
    },
    FaqEntry {
        question: "Do you accept insurance?",
        answer: "Yes. We accept Medicare and most major insurance plans. Our team will verify your coverage before care begins.",
    },
    FaqEntry {
        question: "Do I need a doctor's referral?",
        answer: "Skilled services such as nursing and therapy require a physician's order. We coordinate directly with your doctor to obtain it.",
    },
    FaqEntry {
        question: "How quickly can care start?",
        answer: "In most cases we can schedule a first visit within 24 to 48 hours of receiving a referral.",
    },
    FaqEntry {
        question: "Is support available outside office hours?",
        answer: "Yes. Our nurses are on call 24 hours a day, 7 days a week for current patients.",
    },
];

/// Look up a category by its id
pub fn find_category(id: &str) -> Option<&'static ServiceCategory> {
    SERVICE_CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_ids_are_unique() {
        let ids: HashSet<_> = SERVICE_CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), SERVICE_CATEGORIES.len());
    }

    #[test]
    fn test_find_category() {
        let therapy = find_category("therapy-services").unwrap();
        assert_eq!(therapy.title, "Therapy Services");
        assert_eq!(therapy.services.len(), 4);
        assert!(find_category("dentistry").is_none());
    }

    #[test]
    fn test_other_services_has_no_items() {
        let other = find_category("other-services").unwrap();
        assert!(other.services.is_empty());
    }

    #[test]
    fn test_every_service_item_has_details() {
        for category in SERVICE_CATEGORIES {
            for item in category.services {
                assert!(!item.details.is_empty(), "{} has no details", item.title);
            }
        }
    }
}
