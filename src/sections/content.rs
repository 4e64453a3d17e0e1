use yew::prelude::*;

use crate::components::reveal::{stagger, Motion, Reveal};
use crate::components::ui::{badge, block_title, detail_row, rating_tone, section_header, Tone};
use crate::icons::Icon;

struct BlogTopic {
    title: &'static str,
    category: &'static str,
    seo_value: &'static str,
    target: &'static str,
}

const BLOG_TOPICS: [BlogTopic; 5] = [
    BlogTopic {
        title: "10 Reasons Why Every Wedding Needs a Photo Booth",
        category: "Wedding",
        seo_value: "High",
        target: "Engaged Couples",
    },
    BlogTopic {
        title: "How Drone Videography Captures the Magic of Whistler Weddings",
        category: "Drone + Wedding",
        seo_value: "High",
        target: "Whistler Couples",
    },
    BlogTopic {
        title: "The Ultimate Guide to Choosing the Perfect Photo Booth",
        category: "Educational",
        seo_value: "Medium",
        target: "Event Planners",
    },
    BlogTopic {
        title: "5 Creative Ways to Use a Photo Booth at Corporate Events",
        category: "Corporate",
        seo_value: "Medium",
        target: "Corporate Planners",
    },
    BlogTopic {
        title: "Why 360° Photo Booths Are Taking Over Vancouver Events",
        category: "Technology",
        seo_value: "High",
        target: "Tech-Savvy Clients",
    },
];

struct SocialChannel {
    icon: Icon,
    platform: &'static str,
    content: &'static str,
    frequency: &'static str,
    focus: &'static str,
}

const SOCIAL: [SocialChannel; 3] = [
    SocialChannel {
        icon: Icon::Instagram,
        platform: "Instagram",
        content: "Behind-the-scenes footage of drone shoots and photo booth setups",
        frequency: "Daily",
        focus: "Visual Storytelling",
    },
    SocialChannel {
        icon: Icon::Linkedin,
        platform: "LinkedIn",
        content: "Case studies showcasing ROI from corporate events using combined services",
        frequency: "3x/week",
        focus: "B2B Engagement",
    },
    SocialChannel {
        icon: Icon::Facebook,
        platform: "Facebook",
        content: "Client testimonials and event highlight reels",
        frequency: "Daily",
        focus: "Community Building",
    },
];

struct VideoIdea {
    title: &'static str,
    description: &'static str,
    purpose: &'static str,
    duration: &'static str,
}

const VIDEOS: [VideoIdea; 3] = [
    VideoIdea {
        title: "Meet the Pilots: Jordan and Kitz",
        description: "A short video introducing the drone experts",
        purpose: "Humanize the Brand",
        duration: "2-3 minutes",
    },
    VideoIdea {
        title: "Top 5 Drone Shots for Weddings",
        description: "A visually engaging video showcasing drone capabilities",
        purpose: "Showcase Expertise",
        duration: "3-4 minutes",
    },
    VideoIdea {
        title: "360° Photo Booth Experience",
        description: "Interactive demonstration of our premium photo booth technology",
        purpose: "Product Demonstration",
        duration: "1-2 minutes",
    },
];

pub fn render() -> Html {
    html! { <ContentStrategy /> }
}

#[function_component(ContentStrategy)]
pub fn content_strategy() -> Html {
    html! {
        <div class="section-inner">
            { section_header(
                "Content Marketing Strategy",
                "Strategic content creation to establish authority, drive engagement, and convert prospects.",
            ) }

            <div class="block">
                { block_title(Some(Icon::FileText), "Blog Content Topics") }
                <div class="stack">
                    { for BLOG_TOPICS.iter().enumerate().map(|(i, topic)| html! {
                        <Reveal from={Motion::FROM_LEFT} delay_ms={stagger(i)} class={classes!("card", "row-card", "spread")}>
                            <div class="grow">
                                <h4>{ topic.title }</h4>
                                <div class="badge-row">
                                    { badge(topic.category, Tone::Accent) }
                                    <span class="muted small">{ format!("Target: {}", topic.target) }</span>
                                </div>
                            </div>
                            { badge(format!("{} SEO Value", topic.seo_value), rating_tone(topic.seo_value)) }
                        </Reveal>
                    }) }
                </div>
            </div>

            <div class="block">
                { block_title(None, "Social Media Content") }
                <div class="grid cols-3">
                    { for SOCIAL.iter().enumerate().map(|(i, channel)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("card", "centered", "hoverable")}>
                            { channel.icon.html("icon-xl") }
                            <h4>{ channel.platform }</h4>
                            <p class="muted">{ channel.content }</p>
                            { detail_row("Frequency:", channel.frequency, "accent") }
                            { detail_row("Focus:", channel.focus, "accent") }
                        </Reveal>
                    }) }
                </div>
            </div>

            <div class="block">
                { block_title(Some(Icon::Video), "Video Content Strategy") }
                <div class="grid cols-3">
                    { for VIDEOS.iter().enumerate().map(|(i, video)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("card", "gradient")}>
                            <div class="card-head spread">
                                <h4>{ video.title }</h4>
                                { badge(video.duration, Tone::Info) }
                            </div>
                            <p class="muted">{ video.description }</p>
                            <div class="spread">
                                <span class="accent strong">{ format!("Purpose: {}", video.purpose) }</span>
                                { Icon::Video.html("icon-sm faint") }
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </div>
    }
}
