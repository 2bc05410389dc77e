use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;
use crate::types::ToastKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: ToastKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// At most one visible notice. Every `show` bumps the generation so timers
/// started for an earlier notice can be recognised as stale.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastState {
    current: Option<Notice>,
    generation: u32,
}

pub enum ToastAction {
    Show(Notice),
    /// Auto-dismiss for the given generation.
    Expire(u32),
    Dismiss,
}

impl ToastState {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Generation whose auto-dismiss timer should be running, if any.
    pub fn pending_dismiss(&self) -> Option<u32> {
        self.current.as_ref().map(|_| self.generation)
    }

    pub fn show(&mut self, notice: Notice) {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(notice);
    }

    pub fn expire(&mut self, generation: u32) -> bool {
        if self.pending_dismiss() == Some(generation) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ToastAction::Show(notice) => {
                next.show(notice);
                true
            }
            ToastAction::Expire(generation) => next.expire(generation),
            ToastAction::Dismiss => next.dismiss(),
        };
        if changed {
            next.into()
        } else {
            self
        }
    }
}

/// Toast state with its auto-dismiss timer. A new notice or a manual dismiss
/// tears down the previous timer before it can fire.
#[hook]
pub fn use_toast() -> UseReducerHandle<ToastState> {
    let state = use_reducer(ToastState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.pending_dismiss(), move |pending| {
            let timer = pending.map(|generation| {
                Timeout::new(TOAST_DURATION_MS, move || {
                    dispatcher.dispatch(ToastAction::Expire(generation));
                })
            });

            move || drop(timer)
        });
    }

    state
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };
    let on_close = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class={notice.kind.css_class()} role="status">
            <div class="toast-content">
                <div class="toast-icon">
                    {
                        match notice.kind {
                            ToastKind::Success => "✓",
                            ToastKind::Error => "✕",
                        }
                    }
                </div>
                <p class="toast-message">{&notice.message}</p>
                <button class="toast-close" onclick={on_close} aria-label="Dismiss">{"✕"}</button>
            </div>
        </div>
    }
}
