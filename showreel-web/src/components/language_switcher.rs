use yew::prelude::*;

#[derive(Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: AttrValue,
    pub label: AttrValue,
    pub name: AttrValue,
    pub active: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub options: Vec<LanguageOption>,
    #[prop_or_default]
    pub on_select: Callback<String>,
}

/// Pill toggle with one option per language and a sliding highlight.
///
/// Only the initial markup comes from here; the localizer moves the `active`
/// class and the slider afterwards.
#[function_component(LanguageSwitcher)]
pub fn language_switcher(p: &Props) -> Html {
    html! {
        <div class="language-switcher">
            <div class="language-toggle">
                { for p.options.iter().map(|opt| {
                    let onclick = {
                        let cb = p.on_select.clone();
                        let code = opt.code.to_string();
                        Callback::from(move |_: MouseEvent| cb.emit(code.clone()))
                    };
                    let class = classes!("language-option", opt.active.then_some("active"));
                    html! {
                        <div
                            class={class}
                            data-lang={opt.code.clone()}
                            title={opt.name.clone()}
                            aria-label={opt.name.clone()}
                            role="button"
                            onclick={onclick}
                        >
                            { opt.label.clone() }
                        </div>
                    }
                }) }
                <div class="language-slider"></div>
            </div>
        </div>
    }
}
