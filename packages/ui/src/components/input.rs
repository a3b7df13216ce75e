use dioxus::prelude::*;

#[component]
pub fn Input(
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "input",
            oninput: move |e| {
                if let Some(f) = &oninput {
                    f.call(e);
                }
            },
            onchange: move |e| {
                if let Some(f) = &onchange {
                    f.call(e);
                }
            },
            onkeydown: move |e| {
                if let Some(f) = &onkeydown {
                    f.call(e);
                }
            },
            ..attributes,
        }
    }
}

#[component]
pub fn Textarea(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        textarea {
            class: "textarea",
            oninput: move |e| {
                if let Some(f) = &oninput {
                    f.call(e);
                }
            },
            ..attributes,
        }
    }
}
