use std::sync::Arc;

use leptos::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::social::SocialLinks;
use crate::content::SiteContent;

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let links = content.footer_nav.clone();
    let socials = content.profile.socials.clone();
    let copyright = content.profile.copyright.clone();

    view! {
        <footer class="footer">
            <div class="footer__links">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <AnchorLink href=link.href class="footer__link">
                                {link.label}
                            </AnchorLink>
                        }
                    })
                    .collect_view()}
            </div>
            <SocialLinks links=socials class="socials--quiet"/>
            <p class="footer__copyright">{copyright}</p>
        </footer>
    }
}
