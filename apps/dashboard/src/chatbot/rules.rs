/// A canned answer and the lowercase phrases that trigger it.
#[derive(Debug)]
pub struct ChatRule {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

/// Evaluated top to bottom; the first rule with a matching keyword answers.
pub const RULES: &[ChatRule] = &[
    ChatRule {
        topic: "greeting",
        keywords: &["hello", "hi", "hey"],
        response: "Hello! I'm your AI assistant for the AI Talent Manager platform. How can I help you today?",
    },
    ChatRule {
        topic: "help",
        keywords: &["help"],
        response: "I can help you with information about our AI Talent Manager platform. You can ask me about features, pricing, how to get started, or any other questions you might have!",
    },
    ChatRule {
        topic: "features",
        keywords: &["feature", "what can", "capabilities"],
        response: "Our AI Talent Manager platform offers several key features:\n\n\
• Smart Matching: AI-driven resource allocation\n\
• Automation: Automated conflict detection & resolution\n\
• Insights & Transparency: Real-time analytics for better decision-making\n\n\
Would you like to know more about any specific feature?",
    },
    ChatRule {
        topic: "matching",
        keywords: &["matching", "smart matching"],
        response: "Smart Matching uses advanced AI algorithms to match the right talent to the right project. It analyzes skills, availability, project requirements, and team dynamics to ensure optimal resource allocation and project success.",
    },
    ChatRule {
        topic: "automation",
        keywords: &["automation", "automated"],
        response: "Our automation features include:\n\n\
• Automatic conflict detection between projects\n\
• Resource availability monitoring\n\
• Intelligent scheduling suggestions\n\
• Automated notifications and alerts\n\n\
This helps prevent scheduling conflicts and ensures smooth project execution.",
    },
    ChatRule {
        topic: "insights",
        keywords: &["insight", "analytics", "transparency"],
        response: "Our Insights & Transparency features provide:\n\n\
• Real-time project status updates\n\
• Resource utilization analytics\n\
• Performance metrics and KPIs\n\
• Detailed reporting dashboards\n\n\
This gives you complete visibility into your team's productivity and project progress.",
    },
    ChatRule {
        topic: "pricing",
        keywords: &["price", "cost", "pricing"],
        response: "We offer flexible pricing plans to suit teams of all sizes. For detailed pricing information, please visit our Pricing page or contact our sales team. We also offer a free trial to get you started!",
    },
    ChatRule {
        topic: "getting_started",
        keywords: &["get started", "sign up", "register"],
        response: "Getting started is easy! You can:\n\n\
1. Click the 'Get Started Free' button in the header\n\
2. Create your account with your email\n\
3. Set up your team and projects\n\
4. Start using our AI-powered matching features\n\n\
Would you like me to guide you through any specific step?",
    },
    ChatRule {
        topic: "demo",
        keywords: &["demo", "book a demo"],
        response: "Great! You can book a demo by clicking the 'Book a Demo' button on our homepage. Our team will show you how the platform works and answer any questions you might have. The demo typically takes about 30 minutes.",
    },
    ChatRule {
        topic: "contact",
        keywords: &["contact", "support"],
        response: "You can reach us through:\n\n\
• Email: support@aitalentmanager.com\n\
• Phone: 1-800-AI-TALENT\n\
• Live chat: Available on our website\n\
• Contact form: Available on our Contact page\n\n\
We're here to help you succeed!",
    },
    ChatRule {
        topic: "about",
        keywords: &["about", "company", "who are you"],
        response: "AI Talent Manager is a cutting-edge platform that uses artificial intelligence to optimize project-resource mapping. We help teams match the right talent to the right project every time, preventing conflicts and accelerating success.",
    },
];

pub const DEFAULT_TOPIC: &str = "default";

pub const DEFAULT_RESPONSE: &str = "I'm here to help you learn more about our AI Talent Manager platform! You can ask me about our features, pricing, how to get started, or anything else you'd like to know. What would you like to explore?";
