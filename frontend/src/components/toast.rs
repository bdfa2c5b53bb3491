use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::contact::{Acknowledge, Acknowledgement};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub ack: Acknowledgement,
}

pub enum ToastAction {
    Show(Acknowledgement),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Show(ack) => {
                next.toasts.insert(0, Toast { id: next.next_id, ack });
                next.toasts.truncate(config::TOAST_LIMIT);
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                next.toasts.retain(|toast| toast.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Handle handed to sections through context; showing a toast is the page's
/// only acknowledgement surface.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

impl Acknowledge for ToastHandle {
    fn acknowledge(&self, ack: Acknowledgement) {
        debug!("showing toast {:?}", ack.title);
        self.dispatcher.dispatch(ToastAction::Show(ack));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let handle = ToastHandle { dispatcher: queue.dispatcher() };

    html! {
        <ContextProvider<ToastHandle> context={handle.clone()}>
            { for props.children.iter() }
            <ol class="toast-viewport" aria-live="polite">
                { for queue.toasts().iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} dispatcher={handle.dispatcher.clone()} />
                }) }
            </ol>
            <style>
                {r#"
                    .toast-viewport {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        max-width: 380px;
                    }
                    .toast {
                        position: relative;
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.75rem;
                        padding: 1rem 2.5rem 1rem 1.25rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast-title {
                        font-weight: 600;
                        color: #2D5016;
                        margin: 0 0 0.25rem 0;
                    }
                    .toast-description {
                        color: #4b5563;
                        margin: 0;
                        font-size: 0.9rem;
                    }
                    .toast-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.5rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #9ca3af;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let dispatcher = props.dispatcher.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                });
                // Dropping the handle cancels the pending dismissal.
                move || drop(timeout)
            },
            id,
        );
    }

    let onclose = {
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <li class="toast" role="status">
            <p class="toast-title">{ &props.toast.ack.title }</p>
            <p class="toast-description">{ &props.toast.ack.description }</p>
            <button class="toast-close" aria-label="Close" onclick={onclose}>{"✕"}</button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ack(title: &str) -> Acknowledgement {
        Acknowledgement { title: title.to_string(), description: String::new() }
    }

    #[test]
    fn newest_toast_replaces_older_ones() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Show(ack("first")))
            .reduce(ToastAction::Show(ack("second")));
        assert_eq!(queue.toasts().len(), config::TOAST_LIMIT);
        assert_eq!(queue.toasts()[0].ack.title, "second");
        assert_eq!(queue.toasts()[0].id, 1);
    }

    #[test]
    fn dismiss_removes_only_matching_id() {
        let queue = Rc::new(ToastQueue::default()).reduce(ToastAction::Show(ack("hello")));
        let unchanged = queue.clone().reduce(ToastAction::Dismiss(42));
        assert_eq!(unchanged.toasts().len(), 1);
        let cleared = unchanged.reduce(ToastAction::Dismiss(0));
        assert!(cleared.toasts().is_empty());
    }
}
