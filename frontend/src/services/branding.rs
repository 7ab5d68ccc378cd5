use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config;

/// Elements the animation runtime injects to credit itself.
const BRANDING_TARGETS: [&str; 6] = [
    "a[href*=\"unicorn\"]",
    "button[title*=\"unicorn\"]",
    "div[title*=\"Made with\"]",
    "[class*=\"brand\"]",
    "[class*=\"credit\"]",
    "[class*=\"watermark\"]",
];

pub fn project_selector(project_id: &str) -> String {
    format!("[data-us-project=\"{}\"]", project_id)
}

pub fn branding_selector() -> String {
    BRANDING_TARGETS.join(", ")
}

fn style_element_id(project_id: &str) -> String {
    format!("us-branding-{}", project_id)
}

/// Style sheet that clips the runtime's canvas and hides its credits until
/// the pruner gets to them.
pub fn branding_css(project_id: &str) -> String {
    let root = project_selector(project_id);
    let hidden = BRANDING_TARGETS
        .iter()
        .chain(std::iter::once(&".unicorn-brand"))
        .map(|target| format!("{} {}", root, target))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "{root} {{ position: relative !important; overflow: hidden !important; }}\n\
         {root} canvas {{ clip-path: inset(0 0 10% 0) !important; }}\n\
         {root} * {{ pointer-events: none !important; }}\n\
         {hidden} {{ display: none !important; visibility: hidden !important; opacity: 0 !important; }}\n",
        root = root,
        hidden = hidden,
    )
}

/// Adds the branding style sheet for a project once per page.
pub fn install_branding_styles(project_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let id = style_element_id(project_id);
    if document.get_element_by_id(&id).is_some() {
        return;
    }
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(&id);
    style.set_text_content(Some(&branding_css(project_id)));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

/// Removes injected credits below the project root. Returns how many
/// elements were removed; a missing root is not an error.
pub fn prune_branding(project_id: &str) -> u32 {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Some(root) = document.query_selector(&project_selector(project_id)).ok().flatten() else {
        return 0;
    };
    let Ok(found) = root.query_selector_all(&branding_selector()) else {
        return 0;
    };

    let mut removed = 0;
    for index in 0..found.length() {
        let Some(element) = found.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        if element.parent_node().is_some() {
            element.remove();
            removed += 1;
        }
    }
    if removed > 0 {
        debug!("pruned {} branding elements from {}", removed, project_id);
    }
    removed
}

/// Repeated prunes after the runtime loads, since it keeps injecting
/// credits for a few seconds. Dropping the pruner cancels what is left.
pub struct BrandingPruner {
    pending: Vec<Timeout>,
}

impl BrandingPruner {
    pub fn schedule(project_id: &'static str) -> Self {
        let mut pending = Vec::new();
        for delay in config::BRANDING_PRUNE_SCHEDULE_MS {
            if delay == 0 {
                prune_branding(project_id);
            } else {
                pending.push(Timeout::new(delay, move || {
                    prune_branding(project_id);
                }));
            }
        }
        Self { pending }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn cancel(mut self) {
        // gloo timeouts clear themselves when dropped
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_schedule_runs_now_then_backs_off() {
        assert_eq!(config::BRANDING_PRUNE_SCHEDULE_MS, [0, 500, 1500, 3000]);
        assert!(config::BRANDING_PRUNE_SCHEDULE_MS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn selectors_are_scoped_to_the_project() {
        assert_eq!(project_selector("abc"), "[data-us-project=\"abc\"]");

        let css = branding_css("abc");
        assert!(css.contains("[data-us-project=\"abc\"] canvas"));
        assert!(css.contains("[data-us-project=\"abc\"] a[href*=\"unicorn\"]"));
        assert!(css.contains("[data-us-project=\"abc\"] .unicorn-brand"));
        assert!(!css.contains("[data-us-project=\"other\"]"));
    }

    #[test]
    fn branding_selector_lists_every_target() {
        let selector = branding_selector();
        assert_eq!(selector.split(", ").count(), BRANDING_TARGETS.len());
        assert!(selector.starts_with("a[href*=\"unicorn\"]"));
    }
}
