use leptos::prelude::*;

use crate::content::{
    ABOUT_STATS, BLOG_POSTS, GITHUB_URL, LINKEDIN_URL, OWNER_EMAIL, PROJECTS, SKILLS,
    TECHNOLOGIES,
};

use super::Reveal;

#[component]
fn SectionHeader(
    badge: &'static str,
    lead: &'static str,
    highlight: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-secondary text-sm text-secondary-foreground mb-4">
                {badge}
            </div>
            <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-4">
                {lead} " " <span class="text-gradient">{highlight}</span>
            </h2>
            <p class="text-lg text-muted-foreground max-w-2xl mx-auto">{blurb}</p>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-hero">
            <div class="container mx-auto px-4 md:px-6 pt-20">
                <div class="text-center lg:text-left space-y-6 animate-fade-up">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-secondary/50 border border-border/50 text-sm text-muted-foreground">
                        <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse" />
                        "Open to opportunities"
                    </div>
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold leading-tight">
                        "Building Robust " <span class="text-gradient">"Backends"</span> <br />
                        "with Heart & Code " <span class="text-gradient-gold">"✨"</span>
                    </h1>
                    <p class="text-lg md:text-xl text-muted-foreground max-w-xl mx-auto lg:mx-0">
                        "3rd Year B.Tech CSE student from West Bengal, India. Passionate about crafting secure, scalable applications with Node.js, Redis, and OAuth 2.0."
                    </p>
                    <div class="flex flex-wrap gap-4 justify-center lg:justify-start">
                        <a href="#projects" class="rounded-full px-8 py-3 bg-primary text-primary-foreground shadow-glow">
                            "View My Work"
                        </a>
                        <a href="#contact" class="rounded-full px-8 py-3 border border-border/50 hover:bg-secondary/50">
                            "Get In Touch"
                        </a>
                    </div>
                    <div class="flex gap-4 justify-center lg:justify-start pt-4">
                        <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" aria-label="GitHub" class="p-3 rounded-full bg-secondary/50 hover:bg-secondary">
                            <i class="devicon-github-plain" />
                        </a>
                        <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" aria-label="LinkedIn" class="p-3 rounded-full bg-secondary/50 hover:bg-secondary">
                            <i class="devicon-linkedin-plain" />
                        </a>
                        <a href=format!("mailto:{OWNER_EMAIL}") aria-label="Email" class="p-3 rounded-full bg-secondary/50 hover:bg-secondary">
                            <i class="extra-email" />
                        </a>
                    </div>
                </div>
                <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                    <a href="#about" class="flex flex-col items-center gap-2 text-muted-foreground hover:text-foreground">
                        <span class="text-sm">"Scroll to explore"</span>
                        "↓"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 md:py-32 relative overflow-hidden">
            <div class="container mx-auto px-4 md:px-6">
                <Reveal layout="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="flex justify-center">
                        <img
                            src="/logo.jpg"
                            alt="Sudipto Gayen Logo"
                            class="w-64 h-64 md:w-80 md:h-80 rounded-full border-4 border-primary/20 shadow-glow"
                        />
                    </div>
                    <div class="space-y-6">
                        <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-secondary/50 text-sm text-secondary-foreground">
                            "👋 About Me"
                        </div>
                        <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold">
                            "Passionate " <span class="text-gradient">"Backend Wizard"</span> <br />
                            "Crafting Digital Magic"
                        </h2>
                        <p class="text-lg text-muted-foreground leading-relaxed">
                            "Hey there! I'm a 3rd-year B.Tech Computer Science student with an insatiable curiosity for backend development. From building secure authentication systems to optimizing database queries, I love diving deep into the server-side of things."
                        </p>
                        <p class="text-lg text-muted-foreground leading-relaxed">
                            "Currently exploring the fascinating worlds of "
                            <span class="text-primary font-medium">"distributed systems (CRDTs)"</span> ", "
                            <span class="text-purple font-medium">"WebSockets"</span> ", and "
                            <span class="text-gold font-medium">"AI engineering"</span>
                            ". When I'm not coding, you'll find me sipping chai and dreaming up new project ideas."
                        </p>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 pt-6">
                            {ABOUT_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="glass-card p-4 text-center">
                                            <div class="text-2xl font-bold text-gradient">{stat.value}</div>
                                            <div class="text-sm text-muted-foreground">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-24 md:py-32 bg-secondary/30 relative overflow-hidden">
            <div class="container mx-auto px-4 md:px-6">
                <Reveal>
                    <SectionHeader
                        badge="📁 Featured Work"
                        lead="Projects That"
                        highlight="Spark Joy"
                        blurb="A collection of backend projects showcasing my expertise in building scalable, secure, and performant applications."
                    />
                    <div class="grid md:grid-cols-2 gap-6 lg:gap-8">
                        {PROJECTS
                            .iter()
                            .map(|project| {
                                view! {
                                    <div class="group glass-card p-6 md:p-8 hover:border-primary/30">
                                        <div class="flex items-start justify-between mb-4">
                                            <span class="p-3 rounded-xl bg-primary/10 text-primary">"📁"</span>
                                            <div class="flex gap-2">
                                                <a href=project.github target="_blank" rel="noopener noreferrer" class="p-2 rounded-lg hover:bg-secondary">
                                                    <i class="devicon-github-plain" />
                                                </a>
                                                {project
                                                    .demo
                                                    .map(|demo| {
                                                        view! {
                                                            <a href=demo target="_blank" rel="noopener noreferrer" class="p-2 rounded-lg hover:bg-secondary">
                                                                <i class="extra-link" />
                                                            </a>
                                                        }
                                                    })}
                                            </div>
                                        </div>
                                        <h3 class="text-xl font-bold mb-3 group-hover:text-primary">{project.title}</h3>
                                        <p class="text-muted-foreground mb-6 leading-relaxed">{project.description}</p>
                                        <div class="flex flex-wrap gap-2">
                                            {project
                                                .tech
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="px-3 py-1 text-xs font-medium rounded-full bg-secondary text-secondary-foreground">
                                                            {*tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        {project
                                            .demo
                                            .filter(|_| project.featured)
                                            .map(|demo| {
                                                view! {
                                                    <div class="mt-6 pt-6 border-t border-border/50">
                                                        <a href=demo target="_blank" rel="noopener noreferrer" class="rounded-full px-4 py-2 border text-sm">
                                                            "View Live Demo"
                                                        </a>
                                                    </div>
                                                }
                                            })}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="text-center mt-12">
                        <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="rounded-full px-8 py-3 border">
                            "View All on GitHub"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-24 md:py-32 relative overflow-hidden">
            <div class="container mx-auto px-4 md:px-6">
                <Reveal>
                    <SectionHeader
                        badge="⚡ Tech Stack"
                        lead="Skills &"
                        highlight="Superpowers"
                        blurb="The tools and technologies I use to bring backend ideas to life."
                    />
                    <div class="grid lg:grid-cols-2 gap-12 max-w-5xl mx-auto">
                        <div class="space-y-6">
                            {SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div title=skill.tooltip>
                                            <div class="flex justify-between mb-2">
                                                <span class="font-medium">{skill.name}</span>
                                                <span class="text-sm text-muted-foreground">{format!("{}%", skill.level)}</span>
                                            </div>
                                            <div class="h-3 bg-secondary rounded-full overflow-hidden">
                                                <div
                                                    class=format!("h-full rounded-full bg-gradient-to-r {}", skill.accent.gradient())
                                                    style=format!("width: {}%", skill.level)
                                                />
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex flex-wrap gap-3 content-start">
                            {TECHNOLOGIES
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <div class="glass-card px-4 py-3">
                                            <div class="font-medium">{tech.name}</div>
                                            <div class="text-xs text-muted-foreground">{tech.category}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <section id="blog" class="py-24 md:py-32 bg-secondary/30 relative overflow-hidden">
            <div class="container mx-auto px-4 md:px-6">
                <Reveal>
                    <SectionHeader
                        badge="📖 Insights & Learnings"
                        lead="Blog &"
                        highlight="Thoughts"
                        blurb="Sharing my journey, discoveries, and occasional debugging adventures in the world of backend development."
                    />
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8">
                        {BLOG_POSTS
                            .iter()
                            .map(|post| {
                                view! {
                                    <article class="group glass-card overflow-hidden hover:border-primary/30">
                                        <div class="h-2 bg-gradient-to-r from-primary via-purple to-gold" />
                                        <div class="p-6">
                                            <div class="flex items-center gap-4 text-sm text-muted-foreground mb-4">
                                                <span>"📅 " {post.date}</span>
                                                <span>{post.read_time}</span>
                                            </div>
                                            <h3 class="text-xl font-bold mb-3 group-hover:text-primary line-clamp-2">{post.title}</h3>
                                            <p class="text-muted-foreground mb-6 line-clamp-3">{post.excerpt}</p>
                                            <div class="flex flex-wrap gap-2">
                                                {post
                                                    .tags
                                                    .iter()
                                                    .map(|tag| {
                                                        view! {
                                                            <span class="px-2 py-1 text-xs rounded-md bg-secondary">{*tag}</span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
