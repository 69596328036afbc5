use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Backdrop + centered card. Buttons (submit / cancel) belong to the caller.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    html! {
        <div class="fixed inset-0 flex items-center justify-center bg-opacity-30 backdrop-blur-xs">
            <div class="bg-white p-6 rounded-lg shadow-lg w-96">
                <h3 class="text-xl font-semibold mb-4">{ props.title.clone() }</h3>
                { props.children.clone() }
            </div>
        </div>
    }
}
