// SPDX-License-Identifier: MPL-2.0
//! Static content shown when the CMS supplies nothing.
//!
//! The controllers cope with empty lists on their own; substituting these
//! lists is a page-level choice made by the shell.

use crate::ui::carousel::Testimonial;
use crate::ui::gallery::Project;

/// Types with a built-in placeholder list.
pub trait Fallback: Sized {
    fn fallback() -> Vec<Self>;
}

/// Returns `list`, or the placeholder list if it is empty.
#[must_use]
pub fn or_fallback<T: Fallback>(list: Vec<T>) -> Vec<T> {
    if list.is_empty() {
        tracing::debug!("content list empty, using placeholders");
        T::fallback()
    } else {
        list
    }
}

fn project(
    id: &str,
    title: &str,
    category: &str,
    description: &str,
    gradient: &str,
    technologies: &[&str],
) -> Project {
    Project {
        id: id.to_string(),
        title: Some(title.to_string()),
        slug: None,
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        link: Some("#".to_string()),
        technologies: Some(technologies.iter().map(ToString::to_string).collect()),
        gradient: Some(gradient.to_string()),
    }
}

impl Fallback for Project {
    fn fallback() -> Vec<Self> {
        vec![
            project(
                "1",
                "BadhonAI Portfolio",
                "web",
                "Personal portfolio website focused on speed, clarity and simple UX.",
                "from-purple-600 to-blue-900",
                &["React", "Next.js", "TypeScript", "Tailwind CSS"],
            ),
            project(
                "2",
                "Dashboard Concept",
                "uiux",
                "Clean analytics dashboard designed with Figma for SaaS style products.",
                "from-pink-500 to-orange-500",
                &["Figma", "UI/UX Design", "Prototyping"],
            ),
            project(
                "3",
                "Learning App UI",
                "mobile",
                "Mobile app screens for a simple learning / course experience.",
                "from-blue-400 to-cyan-500",
                &["React Native", "Flutter", "UI Design"],
            ),
            project(
                "4",
                "Landing Page",
                "web",
                "Clean landing page designed for modern SaaS / product launches.",
                "from-green-500 to-emerald-400",
                &["Next.js", "React", "Framer Motion"],
            ),
            project(
                "5",
                "Edit & Motion",
                "multimedia",
                "Short form edits and motion work for social platforms.",
                "from-orange-500 to-pink-500",
                &["After Effects", "Premiere Pro", "Motion Graphics"],
            ),
            project(
                "6",
                "Mini Product UI",
                "uiux",
                "Small product UI explorations for practicing new ideas.",
                "from-blue-300 to-pink-300",
                &["Figma", "Design System", "UI Components"],
            ),
        ]
    }
}

fn testimonial(
    id: &str,
    name: &str,
    role: &str,
    company: &str,
    text: &str,
    accent_color: &str,
) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        name: Some(name.to_string()),
        role: Some(role.to_string()),
        company: Some(company.to_string()),
        text: Some(text.to_string()),
        rating: Some(5),
        accent_color: Some(accent_color.to_string()),
    }
}

impl Fallback for Testimonial {
    fn fallback() -> Vec<Self> {
        vec![
            testimonial(
                "1",
                "Alex Rahman",
                "Product Manager",
                "TechFlow",
                "Transformed our outdated platform into a modern, lightning-fast web app. \
                 The attention to detail and creative problem-solving made the entire process seamless.",
                "from-blue-500 to-cyan-400",
            ),
            testimonial(
                "2",
                "Sarah Chen",
                "Startup Founder",
                "NovaByte",
                "Built our MVP in record time with beautiful animations and pixel-perfect \
                 design that our users absolutely love.",
                "from-purple-500 to-pink-400",
            ),
            testimonial(
                "3",
                "James Wilson",
                "CTO",
                "CloudScale",
                "Exceptional full-stack skills. Our entire frontend was architected from scratch \
                 and the performance scores went through the roof.",
                "from-cyan-500 to-blue-400",
            ),
            testimonial(
                "4",
                "Priya Sharma",
                "Design Lead",
                "PixelCraft",
                "Bridges the gap between design and development perfectly, bringing our Figma \
                 files to life with smooth animations.",
                "from-pink-500 to-orange-400",
            ),
            testimonial(
                "5",
                "Michael Torres",
                "Engineering Manager",
                "DataPulse",
                "Outstanding code quality: clean, well-documented and maintainable.",
                "from-green-500 to-emerald-400",
            ),
            testimonial(
                "6",
                "Emily Park",
                "UX Researcher",
                "InnoLab",
                "Every interaction feels intentional, polished and delightful.",
                "from-orange-500 to-yellow-400",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::gallery::{Categorized, CategoryFilter, Gallery};

    #[test]
    fn empty_lists_get_placeholders() {
        assert_eq!(or_fallback(Vec::<Project>::new()).len(), 6);
        assert_eq!(or_fallback(Vec::<Testimonial>::new()).len(), 6);
    }

    #[test]
    fn non_empty_lists_are_kept() {
        let supplied = vec![Project {
            id: "cms".to_string(),
            ..Project::default()
        }];
        let kept = or_fallback(supplied.clone());
        assert_eq!(kept, supplied);
    }

    #[test]
    fn placeholder_projects_cover_every_tab() {
        let gallery = Gallery::new(Project::fallback());
        let ids: Vec<&str> = gallery.categories().iter().map(CategoryFilter::id).collect();
        assert_eq!(ids, vec!["all", "web", "uiux", "mobile", "multimedia"]);
        assert!(Project::fallback().iter().all(|p| !p.category().is_empty()));
    }

    #[test]
    fn placeholder_testimonials_have_initials() {
        for testimonial in Testimonial::fallback() {
            assert_eq!(testimonial.initials().chars().count(), 2);
            assert_eq!(testimonial.stars(), 5);
        }
    }
}
