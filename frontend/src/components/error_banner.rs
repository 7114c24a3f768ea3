use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(false))
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 5000 } else { 0 })
    };

    // A new message reopens the banner.
    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };

    html! {
        <div
            class={classes!(
                "error-banner",
                "flex",
                "items-start",
                "gap-3",
                "rounded-2xl",
                "px-5",
                "py-4",
                "text-sm",
                "shadow-xl",
                "w-full",
                "max-w-2xl"
            )}
            role="alert"
            aria-live="assertive"
        >
            <span class="text-2xl" aria-hidden="true">{"⚠️"}</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{"Something went wrong"}</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class={classes!(
                    "ml-4",
                    "inline-flex",
                    "h-8",
                    "w-8",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "bg-transparent",
                    "text-lg",
                    "hover:bg-black/10",
                    "dark:hover:bg-white/15"
                )}
                aria-label="Dismiss error"
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
