use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Large => 56,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Large)]
    pub size: SpinnerSize,
    /// Inline spinners sit next to text and skip the padded box.
    #[prop_or(false)]
    pub inline: bool,
}

/// Placeholder shown while data a view depends on is still loading.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());
    let wrapper = if props.inline {
        classes!("loading-spinner", "inline-flex", "items-center")
    } else {
        classes!("loading-spinner", "flex", "items-center", "justify-center", "p-6")
    };

    html! {
        <div class={wrapper} role="status" aria-live="polite" aria-busy="true">
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-[3px]",
                    "border-transparent",
                    "bg-[conic-gradient(var(--primary),transparent)]",
                    "[mask:radial-gradient(farthest-side,transparent_calc(100%-4px),#000_calc(100%-3px))]",
                    "animate-[spin_0.9s_linear_infinite]"
                )}
            />
            <span class={classes!("sr-only")}>{ "Loading..." }</span>
        </div>
    }
}
