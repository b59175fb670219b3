//! Opportunity catalog.
//!
//! Static, build-time table of listings grouped by cohort. Read-only: there
//! are no mutation operations and nothing here can fail.

use crate::types::{Cohort, CohortKey, EmploymentType, Listing};

/// Shared application form used by most listings
pub const APPLICATION_FORM: &str = "https://docs.google.com/forms/d/e/1FAIpQLSfqAa75Wq9W2ts-3XigaqkD0aozMopXhTVYz6KTA4mIpv9buA/viewform?usp=dialog";

/// Separate form for the Microsoft SWE opening
pub const SWE_FORM: &str = "https://docs.google.com/forms/d/e/1FAIpQLSfBqM3VsfVdPjArGXn1BeFY2DEDD1fyGjoSSlUdipFZYwxXrw/viewform?usp=dialog";

const fn full_time(
    employer: &'static str,
    role: &'static str,
    compensation: &'static str,
    deadline: &'static str,
    form_url: &'static str,
) -> Listing {
    Listing {
        employer,
        role,
        compensation,
        deadline,
        form_url,
        employment: EmploymentType::FullTime,
    }
}

const fn internship(
    employer: &'static str,
    role: &'static str,
    compensation: &'static str,
    deadline: &'static str,
    form_url: &'static str,
) -> Listing {
    Listing {
        employer,
        role,
        compensation,
        deadline,
        form_url,
        employment: EmploymentType::Internship,
    }
}

/// Ordered cohorts with their listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cohorts: Vec<Cohort>,
}

impl Catalog {
    /// Build a catalog from an explicit cohort list (order is preserved)
    pub fn new(cohorts: Vec<Cohort>) -> Self {
        Self { cohorts }
    }

    /// The portal's built-in opportunity table
    pub fn builtin() -> Self {
        Self::new(vec![
            Cohort {
                key: CohortKey::from("btech-2026"),
                title: "B.Tech 2026",
                subtitle: "Full-time placement opportunities for the graduating batch",
                nav_label: "B.Tech 2026",
                listings: vec![
                    full_time("Google", "Software Developer Engineer", "₹45 LPA", "15 Aug 2025", APPLICATION_FORM),
                    full_time("Microsoft", "Software Engineer", "₹42 LPA", "20 Aug 2025", SWE_FORM),
                    full_time("Amazon", "Software Development Engineer", "₹38 LPA", "10 Sep 2025", APPLICATION_FORM),
                    full_time("Apple", "iOS Developer", "₹50 LPA", "25 Aug 2025", APPLICATION_FORM),
                    full_time("Netflix", "Backend Engineer", "₹55 LPA", "30 Aug 2025", APPLICATION_FORM),
                    full_time("Meta", "Frontend Developer", "₹48 LPA", "05 Sep 2025", APPLICATION_FORM),
                ],
            },
            Cohort {
                key: CohortKey::from("btech-dual-2027"),
                title: "B.Tech Dual Degree 2027",
                subtitle: "Summer internships for the dual degree programme",
                nav_label: "Dual 2027",
                listings: vec![
                    internship("Goldman Sachs", "Technology Summer Analyst", "₹1.2 LPM", "28 Feb 2025", APPLICATION_FORM),
                    internship("JPMorgan Chase", "Software Engineer Intern", "₹1.0 LPM", "05 Mar 2025", APPLICATION_FORM),
                    internship("Uber", "Backend Engineering Intern", "₹80K PM", "15 Mar 2025", APPLICATION_FORM),
                    internship("Salesforce", "Cloud Developer Intern", "₹90K PM", "20 Mar 2025", APPLICATION_FORM),
                    internship("Adobe", "UI/UX Design Intern", "₹85K PM", "10 Mar 2025", APPLICATION_FORM),
                    internship("Tesla", "ML Engineer Intern", "₹95K PM", "25 Mar 2025", APPLICATION_FORM),
                ],
            },
            Cohort {
                key: CohortKey::from("btech-2027"),
                title: "B.Tech 2027",
                subtitle: "Internship opportunities for the pre-final year",
                nav_label: "B.Tech 2027",
                listings: vec![
                    internship("Flipkart", "Software Developer Intern", "₹60K PM", "12 Feb 2025", APPLICATION_FORM),
                    internship("Zomato", "Full Stack Intern", "₹50K PM", "18 Feb 2025", APPLICATION_FORM),
                    internship("Paytm", "Mobile App Intern", "₹45K PM", "22 Feb 2025", APPLICATION_FORM),
                    internship("Swiggy", "Data Science Intern", "₹55K PM", "08 Mar 2025", APPLICATION_FORM),
                    internship("Razorpay", "FinTech Developer Intern", "₹65K PM", "25 Feb 2025", APPLICATION_FORM),
                    internship("Myntra", "Frontend Developer Intern", "₹52K PM", "15 Mar 2025", APPLICATION_FORM),
                ],
            },
            Cohort {
                key: CohortKey::from("btech-dual-2028"),
                title: "B.Tech Dual Degree 2028",
                subtitle: "Early internships for the dual degree programme",
                nav_label: "Dual 2028",
                listings: vec![
                    internship("Infosys", "Software Engineering Intern", "₹25K PM", "30 Jan 2025", APPLICATION_FORM),
                    internship("TCS", "Digital Technology Intern", "₹20K PM", "05 Feb 2025", APPLICATION_FORM),
                    internship("Wipro", "AI/ML Intern", "₹30K PM", "15 Feb 2025", APPLICATION_FORM),
                    internship("HCL Technologies", "Cloud Computing Intern", "₹28K PM", "20 Feb 2025", APPLICATION_FORM),
                    internship("Capgemini", "Data Analytics Intern", "₹32K PM", "25 Jan 2025", APPLICATION_FORM),
                    internship("Accenture", "Technology Consulting Intern", "₹35K PM", "10 Feb 2025", APPLICATION_FORM),
                ],
            },
        ])
    }

    /// All cohorts in display order
    pub fn cohorts(&self) -> &[Cohort] {
        &self.cohorts
    }

    /// Cohort keys in display order
    pub fn keys(&self) -> Vec<CohortKey> {
        self.cohorts.iter().map(|c| c.key.clone()).collect()
    }

    pub fn cohort(&self, key: &CohortKey) -> Option<&Cohort> {
        self.cohorts.iter().find(|c| &c.key == key)
    }

    /// Listings of a cohort; empty for an unknown key
    pub fn listings(&self, key: &CohortKey) -> &[Listing] {
        self.cohort(key).map(|c| c.listings.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, key: &CohortKey) -> bool {
        self.cohort(key).is_some()
    }

    /// Total number of listings across all cohorts
    pub fn listing_count(&self) -> usize {
        self.cohorts.iter().map(|c| c.listings.len()).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
