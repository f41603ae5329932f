use yew::prelude::*;

use crate::route::Route;

const SUPPORT_EMAIL: &str = "support@moneymind.yashwanth.site";

struct Section {
    heading: &'static str,
    body: &'static str,
    points: &'static [&'static str],
}

const PRIVACY: &[Section] = &[
    Section {
        heading: "Information We Collect",
        body: "",
        points: &[
            "Personal information (such as email, name) for authentication",
            "Financial data you provide for tracking and analytics",
            "Usage data for improving our services",
        ],
    },
    Section {
        heading: "How We Use Your Information",
        body: "",
        points: &[
            "To provide and maintain the MoneyMind service",
            "To improve user experience and develop new features",
            "To communicate with you about updates and support",
        ],
    },
    Section {
        heading: "Data Security",
        body: "We implement industry-standard security measures to protect your data. Your information is never sold or shared with third parties except as required by law.",
        points: &[],
    },
];

const TERMS: &[Section] = &[
    Section {
        heading: "Use of Service",
        body: "",
        points: &[
            "You must be at least 13 years old to use MoneyMind.",
            "You are responsible for maintaining the confidentiality of your account.",
            "You agree not to misuse the service or attempt to access it in unauthorized ways.",
        ],
    },
    Section {
        heading: "Limitation of Liability",
        body: "MoneyMind is provided \"as is\" without warranties of any kind. We are not liable for any damages or losses resulting from your use of the service.",
        points: &[],
    },
    Section {
        heading: "Changes to Terms",
        body: "We may update these terms from time to time. Continued use of MoneyMind means you accept the revised terms.",
        points: &[],
    },
];

fn legal_page(title: &'static str, intro: &'static str, sections: &[Section], subject: &'static str) -> Html {
    html! {
        <div class="min-h-screen bg-black text-white px-6 py-12">
            <div class="max-w-3xl mx-auto space-y-8">
                <a href={Route::Landing.path()} class="text-[#83bce3] hover:underline">{"← Back to MoneyMind"}</a>
                <h1 class="text-4xl font-bold bg-gradient-to-r from-[#83bce3] to-[#20D982] inline-block text-transparent bg-clip-text">{ title }</h1>
                <p class="text-gray-300">{ intro }</p>
                { for sections.iter().map(|section| html! {
                    <section class="space-y-3">
                        <h2 class="text-2xl font-semibold text-[#20D982]">{ section.heading }</h2>
                        if !section.body.is_empty() {
                            <p class="text-gray-300">{ section.body }</p>
                        }
                        if !section.points.is_empty() {
                            <ul class="list-disc pl-6 space-y-1 text-gray-300">
                                { for section.points.iter().map(|point| html! { <li>{ *point }</li> }) }
                            </ul>
                        }
                    </section>
                }) }
                <section class="space-y-3">
                    <h2 class="text-2xl font-semibold text-[#20D982]">{"Contact"}</h2>
                    <p class="text-gray-300">
                        { format!("If you have any questions about {}, please contact us at ", subject) }
                        <a href={format!("mailto:{}", SUPPORT_EMAIL)} class="text-[#83bce3] hover:underline">{ SUPPORT_EMAIL }</a>
                    </p>
                </section>
            </div>
        </div>
    }
}

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    legal_page(
        "Privacy Policy",
        "Your privacy is important to us. This Privacy Policy explains how MoneyMind collects, uses, and protects your information.",
        PRIVACY,
        "this Privacy Policy",
    )
}

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    legal_page(
        "Terms of Service",
        "By using MoneyMind, you agree to the following terms and conditions. Please read them carefully.",
        TERMS,
        "these Terms",
    )
}
