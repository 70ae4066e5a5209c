use dioxus::prelude::*;

use crate::components::{AlertDialog, AppNavbar, LoadingIndicator};
use crate::dashboard::use_dashboard_root;

/// Page frame shared by every route. Expects the client and dashboard state
/// from [`crate::dashboard::use_dashboard_root`] higher up the tree.
#[component]
pub fn DashboardShell(children: Element) -> Element {
    rsx! {
        AppNavbar {}
        LoadingIndicator {}
        main { class: "shell", {children} }
        AlertDialog {}
    }
}

/// App root. Owns the language signal that `AppNavbar` writes, the backend client and the dashboard
/// state, and keys `children` on the language so every localized view
/// remounts on a switch while the dashboard state above it is kept.
#[component]
pub fn LocalizedRoot(children: Element) -> Element {
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_dashboard_root();

    rsx! {
        div {
            key: "{lang_code()}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use api::TaskId;
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    use super::*;
    use crate::dashboard::use_dashboard;

    /// Current task seen by each mount of the localized subtree.
    #[derive(Clone, Default)]
    struct MountLog(Rc<RefCell<Vec<Option<TaskId>>>>);

    #[component]
    fn App() -> Element {
        rsx! {
            LocalizedRoot { Localized {} }
        }
    }

    #[component]
    fn Localized() -> Element {
        let dashboard = use_dashboard();
        let mut lang = use_context::<Signal<String>>();
        let log = use_context::<MountLog>();

        use_hook(move || {
            let mounts = {
                let mut log = log.0.borrow_mut();
                log.push(dashboard.session.peek().current_task().cloned());
                log.len()
            };
            if mounts == 1 {
                let mut session = dashboard.session;
                spawn(async move {
                    session.with_mut(|s| s.adopt_task(TaskId::new("T9")));
                    lang.set("es-ES".to_string());
                });
            }
        });

        rsx! {}
    }

    #[tokio::test]
    async fn language_switch_keeps_the_current_task() {
        let log = MountLog::default();
        let mut dom = VirtualDom::new(App).with_root_context(log.clone());
        dom.rebuild_in_place();

        for _ in 0..20 {
            if log.0.borrow().len() >= 2 {
                break;
            }
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }

        let mounts = log.0.borrow().clone();
        assert_eq!(mounts.len(), 2, "subtree was not remounted: {mounts:?}");
        assert_eq!(mounts[0], None);
        assert_eq!(mounts[1], Some(TaskId::new("T9")));
    }
}
