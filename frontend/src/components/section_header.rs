use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub light: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let tone = if props.light { "light" } else { "dark" };

    html! {
        <div class={classes!("section-header", tone)}>
            <h2>{&props.title}</h2>
            <div class="section-rule"></div>
            <p>{&props.subtitle}</p>
        </div>
    }
}
